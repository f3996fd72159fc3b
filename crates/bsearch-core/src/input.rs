//! Host input channel
//!
//! The host supplies `u64` values through a single primitive that takes a
//! provenance flag: `1` for public input, `0` for private input. Guests see it
//! through [`HostInput`]; [`QueuedInput`] is the deterministic host side,
//! primed with one FIFO queue per channel.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{PRIVATE_FLAG, PUBLIC_FLAG};
use crate::{Error, Result};

/// Which input channel a value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Known only to the party supplying it
    Private,
    /// Known to every observer of the computation
    Public,
}

impl Provenance {
    /// Raw host flag for this channel
    pub fn flag(self) -> i32 {
        match self {
            Provenance::Private => PRIVATE_FLAG,
            Provenance::Public => PUBLIC_FLAG,
        }
    }
}

impl TryFrom<i32> for Provenance {
    type Error = Error;

    fn try_from(flag: i32) -> Result<Self> {
        match flag {
            PUBLIC_FLAG => Ok(Provenance::Public),
            PRIVATE_FLAG => Ok(Provenance::Private),
            other => Err(Error::InvalidProvenance(other)),
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Private => write!(f, "private"),
            Provenance::Public => write!(f, "public"),
        }
    }
}

/// Input capability handed to the guest
pub trait HostInput {
    /// Next value from the public channel
    fn next_public_value(&mut self) -> Result<u64>;

    /// Next value from the private channel
    fn next_private_value(&mut self) -> Result<u64>;

    /// Read from the channel named by `provenance`
    fn input(&mut self, provenance: Provenance) -> Result<u64> {
        match provenance {
            Provenance::Public => self.next_public_value(),
            Provenance::Private => self.next_private_value(),
        }
    }

    /// Read using the raw host flag (`1` = public, `0` = private)
    fn input_flag(&mut self, flag: i32) -> Result<u64> {
        self.input(Provenance::try_from(flag)?)
    }
}

impl<T: HostInput + ?Sized> HostInput for &mut T {
    fn next_public_value(&mut self) -> Result<u64> {
        (**self).next_public_value()
    }

    fn next_private_value(&mut self) -> Result<u64> {
        (**self).next_private_value()
    }
}

/// Host input backed by two pre-provisioned queues
#[derive(Debug, Clone, Default)]
pub struct QueuedInput {
    public: VecDeque<u64>,
    private: VecDeque<u64>,
    public_consumed: usize,
    private_consumed: usize,
}

impl QueuedInput {
    pub fn new(public: Vec<u64>, private: Vec<u64>) -> Self {
        Self {
            public: public.into(),
            private: private.into(),
            public_consumed: 0,
            private_consumed: 0,
        }
    }

    /// Queue with only public values
    pub fn public(values: Vec<u64>) -> Self {
        Self::new(values, Vec::new())
    }

    pub fn push(&mut self, provenance: Provenance, value: u64) {
        match provenance {
            Provenance::Public => self.public.push_back(value),
            Provenance::Private => self.private.push_back(value),
        }
    }

    /// Values still queued on a channel
    pub fn remaining(&self, provenance: Provenance) -> usize {
        match provenance {
            Provenance::Public => self.public.len(),
            Provenance::Private => self.private.len(),
        }
    }

    /// Values read so far from a channel
    pub fn consumed(&self, provenance: Provenance) -> usize {
        match provenance {
            Provenance::Public => self.public_consumed,
            Provenance::Private => self.private_consumed,
        }
    }
}

impl HostInput for QueuedInput {
    fn next_public_value(&mut self) -> Result<u64> {
        let value = self
            .public
            .pop_front()
            .ok_or(Error::InputExhausted(Provenance::Public))?;
        self.public_consumed += 1;
        Ok(value)
    }

    fn next_private_value(&mut self) -> Result<u64> {
        let value = self
            .private
            .pop_front()
            .ok_or(Error::InputExhausted(Provenance::Private))?;
        self.private_consumed += 1;
        Ok(value)
    }
}
