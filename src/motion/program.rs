//! Program stream decoding.
//!
//! A program is a flat stream of 3-byte step records produced by host tooling.

use super::step::Step;

/// Ordered source of program bytes.
///
/// `read_byte` blocks (or spins) until a byte is available. The decoder
/// defines no timeout of its own, so a starved source stalls stepping.
pub trait ByteSource {
    /// Read the next byte, waiting for it if necessary.
    fn read_byte(&mut self) -> u8;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> u8 {
        (**self).read_byte()
    }
}

/// Consumer half of an interrupt-fed queue: spins while the queue is empty.
impl<const N: usize> ByteSource for heapless::spsc::Consumer<'_, u8, N> {
    fn read_byte(&mut self) -> u8 {
        loop {
            if let Some(byte) = self.dequeue() {
                return byte;
            }
            core::hint::spin_loop();
        }
    }
}

/// Stateless decoder pulling one step record per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramDecoder;

impl ProgramDecoder {
    /// Read and decode the next step record from `source`.
    pub fn next_step<S: ByteSource + ?Sized>(source: &mut S) -> Step {
        let lo = source.read_byte();
        let hi = source.read_byte();
        let flags = source.read_byte();
        Step::from_bytes([lo, hi, flags])
    }

    /// Encode `steps` back to back into `out`.
    ///
    /// Returns the number of bytes written; stops at the last record that
    /// fits entirely.
    pub fn encode_into(steps: &[Step], out: &mut [u8]) -> usize {
        let mut written = 0;
        for (step, chunk) in steps.iter().zip(out.chunks_exact_mut(Step::ENCODED_LEN)) {
            chunk.copy_from_slice(&step.to_bytes());
            written += Step::ENCODED_LEN;
        }
        written
    }
}
