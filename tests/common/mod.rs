//! Shared fakes for driving the controller without hardware.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cnc_motion::config::units::Hertz;
use cnc_motion::{AnalogSource, AxisPins, MachineConfig, MotorPins, StepTimer, TimerEvents};

/// Config with round numbers: full deflection gives a 200-tick period.
pub fn test_config() -> MachineConfig {
    let mut config = MachineConfig::default();
    config.parameters.steps_per_millimeter = 100.0;
    config.parameters.clock_frequency = Hertz(1_000_000);
    config
}

/// Line transitions in the order they happened.
pub type PinLog = Rc<RefCell<Vec<(&'static str, bool)>>>;

/// Output pin that appends every write to a shared log.
pub struct RecordingPin {
    name: &'static str,
    log: PinLog,
}

impl embedded_hal::digital::ErrorType for RecordingPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for RecordingPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push((self.name, true));
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push((self.name, false));
        Ok(())
    }
}

pub fn recording_pins() -> (MotorPins<RecordingPin>, PinLog) {
    let log: PinLog = Rc::default();
    let pin = |name| RecordingPin {
        name,
        log: log.clone(),
    };
    let pins = MotorPins::new(
        AxisPins::new(pin("x_dir"), pin("x_step")),
        AxisPins::new(pin("y_dir"), pin("y_step")),
        AxisPins::new(pin("z_dir"), pin("z_step")),
    );
    (pins, log)
}

/// Output pin that fails every write while its shared fault flag is set.
pub struct FaultyPin {
    fault: Rc<Cell<bool>>,
}

impl embedded_hal::digital::ErrorType for FaultyPin {
    type Error = embedded_hal::digital::ErrorKind;
}

impl FaultyPin {
    fn write(&self) -> Result<(), embedded_hal::digital::ErrorKind> {
        if self.fault.get() {
            Err(embedded_hal::digital::ErrorKind::Other)
        } else {
            Ok(())
        }
    }
}

impl embedded_hal::digital::OutputPin for FaultyPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write()
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write()
    }
}

/// Six pins sharing one fault flag.
pub fn faulty_pins() -> (MotorPins<FaultyPin>, Rc<Cell<bool>>) {
    let fault = Rc::new(Cell::new(false));
    let pin = || FaultyPin {
        fault: fault.clone(),
    };
    let pins = MotorPins::new(
        AxisPins::new(pin(), pin()),
        AxisPins::new(pin(), pin()),
        AxisPins::new(pin(), pin()),
    );
    (pins, fault)
}

/// High transitions of one line.
pub fn rises(log: &PinLog, name: &str) -> usize {
    log.borrow()
        .iter()
        .filter(|(pin, high)| *pin == name && *high)
        .count()
}

/// One-shot timer whose period elapses as soon as the test fires it.
///
/// Starting the timer latches all three events; each call to
/// `on_timer_interrupt` then services exactly one full period.
#[derive(Clone, Default)]
pub struct FakeTimer {
    pending: Rc<Cell<u8>>,
    reloads: Rc<RefCell<Vec<u16>>>,
}

impl FakeTimer {
    pub fn reloads(&self) -> Vec<u16> {
        self.reloads.borrow().clone()
    }

    pub fn is_armed(&self) -> bool {
        self.pending.get() != 0
    }
}

impl StepTimer for FakeTimer {
    fn pending(&self) -> TimerEvents {
        TimerEvents::from_bits_truncate(self.pending.get())
    }

    fn clear(&mut self, events: TimerEvents) {
        self.pending.set(self.pending.get() & !events.bits());
    }

    fn start_one_shot(&mut self, reload: u16) {
        self.reloads.borrow_mut().push(reload);
        self.pending.set(TimerEvents::all().bits());
    }
}

/// Joystick whose reading the test can move at any time.
#[derive(Clone)]
pub struct FakeJoystick(pub Rc<Cell<[u8; 2]>>);

impl FakeJoystick {
    pub fn centered() -> Self {
        Self(Rc::new(Cell::new([128, 128])))
    }

    pub fn set(&self, raw: [u8; 2]) {
        self.0.set(raw);
    }
}

impl AnalogSource for FakeJoystick {
    fn sample(&self) -> [u8; 2] {
        self.0.get()
    }
}
