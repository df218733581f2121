//! Audio engine — scheduled synthesis on a shared clock.
//!
//! All DSP runs in Rust for deterministic, cross-platform output. The
//! same voices power live scheduling (rendered block-by-block for an
//! AudioWorklet) and the offline WAV renderer.

pub mod clock;
pub mod drone;
pub mod engine;
pub mod envelope;
pub mod filter;
pub mod mixer;
pub mod oscillator;
pub mod renderer;
pub mod tone;
