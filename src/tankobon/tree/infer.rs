use crate::config::LevelOptions;
use crate::error::{Result, TankobonError};
use crate::number::Ordinal;
use num_bigint::BigUint;
use tracing::{debug, info};

/// Whole numbers a group of siblings is expected to use, in increasing order.
///
/// Each sibling claims its number from the pool; whatever is left at the end is
/// missing from the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotPool {
    slots: Vec<BigUint>,
}

impl SlotPool {
    /// `len` consecutive slots starting at `first`.
    pub fn contiguous(first: BigUint, len: usize) -> Self {
        let mut slots = Vec::with_capacity(len);
        let mut next = first;
        for _ in 0..len {
            slots.push(next.clone());
            next += 1u32;
        }
        Self { slots }
    }

    /// A number may take a slot when it is integral and the slot is still free.
    pub fn accepts(&self, number: &Ordinal) -> bool {
        number.is_integral() && self.slots.contains(number.whole())
    }

    pub fn claim(&mut self, whole: &BigUint) -> bool {
        match self.slots.iter().position(|s| s == whole) {
            Some(index) => {
                self.slots.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn last(&self) -> Option<&BigUint> {
        self.slots.last()
    }

    /// Drop `whole` if it is the highest free slot.
    pub fn discard_top(&mut self, whole: &BigUint) -> bool {
        if self.last() == Some(whole) {
            self.slots.pop();
            true
        } else {
            false
        }
    }

    pub fn remaining(&self) -> &[BigUint] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Numbers a name may contain only because of where it lives.
///
/// `hoaxes` are numbers that belong to names of ancestors (or were given by the user),
/// `levels` are the numbers of the ancestors themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spurious {
    pub hoaxes: Vec<Ordinal>,
    pub levels: Vec<Ordinal>,
}

impl Spurious {
    /// Remove one occurrence of each spurious value, in order.
    ///
    /// Hoaxes never remove the last candidate. Ancestor numbers do only when `greedy`.
    pub fn strip(&self, mut numbers: Vec<Ordinal>, greedy: bool) -> Vec<Ordinal> {
        for hoax in &self.hoaxes {
            if numbers.len() == 1 {
                break;
            }
            remove_first(&mut numbers, hoax);
        }
        for level in &self.levels {
            if !greedy && numbers.len() == 1 {
                break;
            }
            remove_first(&mut numbers, level);
        }
        numbers
    }
}

fn remove_first(numbers: &mut Vec<Ordinal>, value: &Ordinal) -> bool {
    match numbers.iter().position(|n| n == value) {
        Some(index) => {
            numbers.remove(index);
            true
        }
        None => false,
    }
}

/// What a directory name says about its node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inference {
    pub number: Option<Ordinal>,
    pub hoaxes: Vec<Ordinal>,
    pub extra: Option<String>,
}

fn list(numbers: &[Ordinal]) -> String {
    let parts: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// Infer the number of the directory `name`.
///
/// With a `pool`, the candidate matching a free slot wins and claims it; a number
/// outside the pool is kept but labelled special. Without a pool every number found is
/// recorded as a hoax and the node stays unnumbered.
pub fn infer(
    name: &str,
    spurious: &Spurious,
    pool: Option<&mut SlotPool>,
    opts: &LevelOptions,
) -> Result<Inference> {
    let numbers = Ordinal::extract(name, opts.roman)?;

    let Some(pool) = pool else {
        debug!("{}: no numbering, hoaxes {}", name, list(&numbers));
        return Ok(Inference {
            number: None,
            hoaxes: numbers,
            extra: None,
        });
    };

    let numbers = spurious.strip(numbers, false);
    let (number, hoaxes) = choose(name, numbers, pool, spurious)?;

    let Some(mut number) = number else {
        debug!("{}: bonus", name);
        return Ok(Inference {
            number: None,
            hoaxes,
            extra: opts.bonus.clone(),
        });
    };

    if opts.normalize {
        number.normalize();
    }

    let mut extra = None;
    if number.is_normal() && !pool.claim(number.whole()) {
        info!(
            "{}: {} is not one of {:?}, marked special",
            name,
            number,
            pool.remaining()
        );
        extra = opts.special.clone();
    }

    debug!("{}: number {}, hoaxes {}", name, number, list(&hoaxes));
    Ok(Inference {
        number: Some(number),
        hoaxes,
        extra,
    })
}

/// Pick the number among the candidates. Returns the number and the remaining hoaxes.
fn choose(
    name: &str,
    mut numbers: Vec<Ordinal>,
    pool: &SlotPool,
    spurious: &Spurious,
) -> Result<(Option<Ordinal>, Vec<Ordinal>)> {
    if numbers.is_empty() {
        return Ok((None, numbers));
    }

    let matched: Vec<usize> = (0..numbers.len())
        .filter(|i| pool.accepts(&numbers[*i]))
        .collect();
    match matched.as_slice() {
        [] => {
            let mut rest = spurious.strip(numbers, true);
            if rest.is_empty() {
                Ok((None, rest))
            } else {
                let number = rest.remove(0);
                Ok((Some(number), rest))
            }
        }
        [index] => {
            let number = numbers.remove(*index);
            Ok((Some(number), numbers))
        }
        _ => {
            debug!(
                "{}: candidates {} fit {:?}",
                name,
                list(&numbers),
                pool.remaining()
            );
            Err(TankobonError::CannotChoose(name.to_string()))
        }
    }
}
