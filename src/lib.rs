//! # ILD task core
//!
//! Computational core of a two-speaker lateralized auditory discrimination
//! task. On each trial the host pipeline presents a sound whose intensity
//! differs between the left and right channel (the ILD, interaural level
//! difference); the subject reports the louder side and is rewarded on a hit.
//!
//! This crate owns the three non-trivial computations of that loop:
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | Level set | [`scaling`], [`lateralize`] | Build the 2N-entry signed level array under a Linear/Logarithmic/Exponential progression, or by mirroring an explicit magnitude list |
//! | Trial order | [`shuffle`] | Uniform random permutations from a single owned, seedable generator |
//! | Reward debias | [`antibias`] | Map per-trial side/hit history to a pair of reward-scaling factors |
//!
//! [`source::LevelSource`] wraps the level builder as a push-based source:
//! every subscriber receives the current array on attach and a fresh array
//! after each successful reconfiguration, synchronously with the call.
//!
//! Parameter parsing (JSON/CSV session files), hardware streams, and the
//! stimulus player live in the host pipeline; this crate only defines the
//! already-parsed parameter types ([`types`]) and the pure computations on
//! them. Everything here is single-threaded and allocation-light: each call
//! produces a freshly owned value and holds no history of its own.

pub mod antibias;
pub mod lateralize;
pub mod scaling;
pub mod shuffle;
pub mod source;
pub mod types;
