//! Machine controller: sole owner of the shared stepping state.
//!
//! After `start()` the controller is driven entirely by the step timer. Each
//! one-shot period raises three events in order, and the handler reacts to
//! each one:
//!
//! 1. direction compare: raise DIR lines whose bit differs from the polarity
//! 2. step compare: raise STEP lines of pulsing axes, then integrate position
//! 3. update: dispatch the next step, which resets the lines and re-arms
//!
//! The loop keeps itself alive until dispatch finds the machine `Ready`.

use embedded_hal::digital::OutputPin;

use crate::config::units::Ticks;
use crate::config::{validate_config, MachineConfig};
use crate::error::{MachineError, Result};
use crate::motion::{plan_step, Axis, ManualControlStatus, ManualInterpolator, ProgramDecoder};
use crate::motion::{ByteSource, PulsePlan, Step};

use super::hal::{AnalogSource, MotorPins, StepTimer, TimerEvents};
use super::position::Position;
use super::state::{Event, EventKind, OperatingState};

/// Three-axis step controller.
///
/// Generic over:
/// - `P`: output line type (must implement `OutputPin`)
/// - `T`: one-shot step timer
/// - `A`: joystick sample source
/// - `B`: program byte source
///
/// On a single-core target, place the controller in an interrupt-safe cell
/// and call [`on_timer_interrupt`](Self::on_timer_interrupt) from the timer
/// ISR. Every foreground call then happens with the interrupt masked.
pub struct MachineController<P, T, A, B>
where
    P: OutputPin,
    T: StepTimer,
    A: AnalogSource,
    B: ByteSource,
{
    config: MachineConfig,
    pins: MotorPins<P>,
    timer: T,
    analog: A,
    program: B,

    interpolator: ManualInterpolator,
    position: Position,
    state: OperatingState,
    last_event: Event,

    /// Step being pulsed during the current period.
    current_step: Step,

    /// A stepping cycle is armed or in progress.
    running: bool,

    /// A non-zero pulse period is in flight.
    pulse_active: bool,

    /// Joystick recalibration requested from the foreground.
    zero_requested: bool,

    /// Step periods clamped into timer range so far.
    clamped_durations: u32,
}

impl<P, T, A, B> MachineController<P, T, A, B>
where
    P: OutputPin,
    T: StepTimer,
    A: AnalogSource,
    B: ByteSource,
{
    /// Create a controller in the `Ready` state.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation.
    pub fn new(
        config: MachineConfig,
        pins: MotorPins<P>,
        timer: T,
        analog: A,
        program: B,
    ) -> Result<Self> {
        validate_config(&config)?;

        Ok(Self {
            interpolator: ManualInterpolator::new(config.manual),
            config,
            pins,
            timer,
            analog,
            program,
            position: Position::new(),
            state: OperatingState::Ready,
            last_event: Event::default(),
            current_step: Step::STOP,
            running: false,
            pulse_active: false,
            zero_requested: false,
            clamped_durations: 0,
        })
    }

    /// Machine configuration.
    #[inline]
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current operating state.
    #[inline]
    pub fn state(&self) -> OperatingState {
        self.state
    }

    /// Last recorded event.
    #[inline]
    pub fn last_event(&self) -> Event {
        self.last_event
    }

    /// Step most recently dispatched to the hardware.
    #[inline]
    pub fn current_step(&self) -> Step {
        self.current_step
    }

    /// Whether a stepping cycle is armed.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a pulse period is in flight.
    #[inline]
    pub fn is_pulse_active(&self) -> bool {
        self.pulse_active
    }

    /// Joystick interpolator working state.
    #[inline]
    pub fn manual_status(&self) -> &ManualControlStatus {
        self.interpolator.status()
    }

    /// Number of step periods clamped into timer range.
    #[inline]
    pub fn clamped_durations(&self) -> u32 {
        self.clamped_durations
    }

    /// Switch the step producer.
    ///
    /// Leaving an active state stops stepping at the next dispatch; entering
    /// one from `Ready` needs [`start`](Self::start) if the loop has halted.
    pub fn set_state(&mut self, state: OperatingState) {
        if state == self.state {
            return;
        }
        info!("state {} -> {}", self.state, state);
        self.last_event = Event::new(
            EventKind::StateChanged,
            [self.state as i32, state as i32, 0],
        );
        self.state = state;
    }

    /// Record a host-visible event.
    #[inline]
    pub fn record_event(&mut self, event: Event) {
        self.last_event = event;
    }

    /// Trigger the first dispatch of a stepping loop.
    ///
    /// # Errors
    ///
    /// Returns `MachineError::Busy` if a cycle is already armed, or a pin
    /// error from the first step.
    pub fn start(&mut self) -> Result<()> {
        if self.running {
            return Err(MachineError::Busy.into());
        }
        self.execute_next_step()
    }

    /// Store the current joystick reading as its zero point, immediately.
    ///
    /// # Errors
    ///
    /// Returns `MachineError::Busy` while a stepping cycle is armed; use
    /// [`request_zero_joystick`](Self::request_zero_joystick) instead.
    pub fn zero_joystick(&mut self) -> Result<()> {
        if self.running {
            return Err(MachineError::Busy.into());
        }
        self.apply_zero();
        Ok(())
    }

    /// Ask the stepping loop to recalibrate the joystick at its next dispatch.
    ///
    /// Applied immediately when nothing is running.
    pub fn request_zero_joystick(&mut self) {
        if self.running {
            self.zero_requested = true;
        } else {
            self.apply_zero();
        }
    }

    fn apply_zero(&mut self) {
        let raw = self.analog.sample();
        self.interpolator.set_zero(raw);
        self.zero_requested = false;
        self.last_event = Event::new(
            EventKind::JoystickZeroed,
            [raw[0] as i32, raw[1] as i32, 0],
        );
        info!("joystick zeroed at {}, {}", raw[0], raw[1]);
    }

    /// Produce the next step from the active producer and execute it.
    ///
    /// In `Ready` nothing is executed and the timer is left stopped, so the
    /// loop ends until [`start`](Self::start) is called again. A failed pin
    /// write halts the loop the same way.
    fn execute_next_step(&mut self) -> Result<()> {
        let result = self.dispatch();
        if result.is_err() {
            self.halt();
        }
        result
    }

    fn dispatch(&mut self) -> Result<()> {
        self.running = true;
        if self.zero_requested {
            self.apply_zero();
        }

        match self.state {
            OperatingState::ManualControl => {
                let raw = self.analog.sample();
                let (step, clamped) = self.interpolator.next_step(raw, &self.config.parameters);
                if clamped {
                    self.note_clamped(step.duration);
                }
                self.execute_step(step)
            }
            OperatingState::RunningProgram => {
                let step = ProgramDecoder::next_step(&mut self.program);
                self.execute_step(step)
            }
            OperatingState::Ready => {
                self.running = false;
                debug!("dispatch in Ready, stepping halted");
                Ok(())
            }
        }
    }

    /// Commit `step` to the hardware and arm one timer period.
    fn execute_step(&mut self, step: Step) -> Result<()> {
        self.pins.reset_all()?;
        self.current_step = step;

        let (plan, clamped) = plan_step(&step, self.config.idle_reload_ticks);
        if clamped {
            self.note_clamped(plan.reload());
        }

        match plan {
            PulsePlan::Pulse(ticks) => {
                self.pulse_active = true;
                self.timer.start_one_shot(ticks.value());
            }
            PulsePlan::Idle(ticks) => {
                self.running = false;
                self.timer.start_one_shot(ticks.value());
            }
        }
        Ok(())
    }

    fn halt(&mut self) {
        self.running = false;
        self.pulse_active = false;
        warn!("pin write failed, stepping halted");
    }

    fn note_clamped(&mut self, applied: Ticks) {
        self.clamped_durations = self.clamped_durations.wrapping_add(1);
        self.last_event = Event::new(
            EventKind::DurationClamped,
            [applied.value() as i32, self.clamped_durations as i32, 0],
        );
        warn!(
            "step period out of timer range, clamped to {} ({} total)",
            applied.value(),
            self.clamped_durations
        );
    }

    /// Timer interrupt handler.
    ///
    /// Services every latched event in period order, clearing each before
    /// acting on it.
    ///
    /// # Errors
    ///
    /// Returns `MachineError::PinError` if an output line cannot be driven.
    /// The remaining events of the period are dropped and stepping halts;
    /// [`start`](Self::start) resumes it.
    pub fn on_timer_interrupt(&mut self) -> Result<()> {
        let pending = self.timer.pending();
        let result = self.service(pending);
        if result.is_err() {
            self.timer.clear(pending);
            self.halt();
        }
        result
    }

    fn service(&mut self, pending: TimerEvents) -> Result<()> {
        if pending.contains(TimerEvents::DIRECTION_COMPARE) {
            self.timer.clear(TimerEvents::DIRECTION_COMPARE);
            let polarity = self.config.polarity.as_array();
            for axis in Axis::ALL {
                let direction = self.current_step.axes.axis(axis).direction;
                if direction != polarity[axis.index()] {
                    self.pins.assert_direction(axis)?;
                }
            }
        }

        if pending.contains(TimerEvents::STEP_COMPARE) {
            self.timer.clear(TimerEvents::STEP_COMPARE);
            // A stop step never pulses, whatever its flags say
            if !self.current_step.is_stop() {
                for axis in Axis::ALL {
                    if self.current_step.axes.axis(axis).step {
                        self.pins.assert_step(axis)?;
                    }
                }
                self.position.apply(&self.current_step);
            }
        }

        if pending.contains(TimerEvents::UPDATE) {
            self.timer.clear(TimerEvents::UPDATE);
            self.pulse_active = false;
            self.dispatch()?;
        }

        Ok(())
    }

    /// Release the hardware handles.
    pub fn release(self) -> (MotorPins<P>, T, A, B) {
        (self.pins, self.timer, self.analog, self.program)
    }
}
