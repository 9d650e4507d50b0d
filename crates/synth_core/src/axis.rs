//! Sampled time axes.
//!
//! A [`TimeAxis`] is an ordered, strictly increasing sequence of dates with
//! a fixed sampling frequency. Two constructions exist:
//!
//! - [`TimeAxis::build`] enumerates true calendar ticks between two dates
//!   (months and years advance on the calendar, so tick spacing varies with
//!   month length).
//! - [`TimeAxis::from_anchor`] lays out a fixed number of ticks around an
//!   anchor date using day-count approximations (30-day months, 365-day
//!   years). This form trades calendar accuracy for a known tick count; in
//!   `End` mode the last tick lands within one granularity unit of the
//!   anchor, not exactly on it.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months};

use crate::types::error::AxisError;
use crate::types::time::Date;

/// Sampling frequency of a time axis.
///
/// Parses from the single-letter codes `D`, `W`, `M`, `Y` as well as full
/// names, case-insensitive.
///
/// # Examples
///
/// ```
/// use synth_core::axis::Frequency;
///
/// let freq: Frequency = "D".parse().unwrap();
/// assert_eq!(freq, Frequency::Daily);
/// assert_eq!(Frequency::Monthly.approx_days(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frequency {
    /// One tick per calendar day.
    Daily,
    /// One tick per week.
    Weekly,
    /// One tick per month.
    Monthly,
    /// One tick per year.
    Annual,
}

impl Frequency {
    /// Returns the single-letter code for this frequency.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Frequency::Daily => "D",
            Frequency::Weekly => "W",
            Frequency::Monthly => "M",
            Frequency::Annual => "Y",
        }
    }

    /// Returns the day-count approximation of one tick interval.
    ///
    /// Used by anchored axes: 1, 7, 30 (⌊365/12⌋) and 365 days. Calendar
    /// axes built with [`TimeAxis::build`] do not use this approximation
    /// for monthly and annual frequencies.
    #[inline]
    pub fn approx_days(&self) -> u64 {
        match self {
            Frequency::Daily => 1,
            Frequency::Weekly => 7,
            Frequency::Monthly => 30,
            Frequency::Annual => 365,
        }
    }

    /// Calendar month count of one tick interval, for month-stepped
    /// frequencies.
    #[inline]
    fn months(&self) -> Option<u32> {
        match self {
            Frequency::Monthly => Some(1),
            Frequency::Annual => Some(12),
            Frequency::Daily | Frequency::Weekly => None,
        }
    }
}

impl FromStr for Frequency {
    type Err = AxisError;

    /// Parses a frequency from its code or name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, AxisError> {
        match s.to_uppercase().as_str() {
            "D" | "DAY" | "DAILY" => Ok(Frequency::Daily),
            "W" | "WEEK" | "WEEKLY" => Ok(Frequency::Weekly),
            "M" | "MONTH" | "MONTHLY" => Ok(Frequency::Monthly),
            "Y" | "A" | "YEAR" | "YEARLY" | "ANNUAL" => Ok(Frequency::Annual),
            _ => Err(AxisError::UnrecognizedOption {
                field: "frequency",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Placement of an anchored axis relative to its anchor date.
///
/// # Examples
///
/// ```
/// use synth_core::axis::AnchorMode;
///
/// let mode: AnchorMode = "end".parse().unwrap();
/// assert_eq!(mode, AnchorMode::End);
/// assert!("middle".parse::<AnchorMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnchorMode {
    /// The axis begins at the anchor date.
    Start,
    /// The axis is back-computed so its last tick lands approximately at
    /// the anchor date.
    End,
}

impl AnchorMode {
    /// Returns the lowercase name of this mode.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            AnchorMode::Start => "start",
            AnchorMode::End => "end",
        }
    }
}

impl FromStr for AnchorMode {
    type Err = AxisError;

    /// Parses an anchor mode from `"start"` or `"end"` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, AxisError> {
        match s.to_lowercase().as_str() {
            "start" => Ok(AnchorMode::Start),
            "end" => Ok(AnchorMode::End),
            _ => Err(AxisError::UnrecognizedOption {
                field: "anchor mode",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AnchorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An ordered, strictly increasing sequence of dates at a fixed frequency.
///
/// A `TimeAxis` always holds at least one tick; both constructors reject
/// inputs that would produce an empty axis.
///
/// # Examples
///
/// ```
/// use synth_core::axis::{Frequency, TimeAxis};
/// use synth_core::types::time::Date;
///
/// let start = Date::from_ymd(2020, 1, 1).unwrap();
/// let end = Date::from_ymd(2020, 3, 1).unwrap();
/// let axis = TimeAxis::build(start, end, Frequency::Monthly).unwrap();
///
/// assert_eq!(axis.len(), 3);
/// assert_eq!(axis.first(), start);
/// assert_eq!(axis.last(), end);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeAxis {
    ticks: Vec<Date>,
}

impl TimeAxis {
    /// Enumerates calendar ticks between `start` and `end` inclusive.
    ///
    /// Every tick less than or equal to `end` is included; `end` itself
    /// appears only when the stepping lands on it exactly.
    ///
    /// # Errors
    ///
    /// - [`AxisError::EmptyRange`] when `start > end`
    /// - [`AxisError::DateOverflow`] when stepping leaves the representable
    ///   date range
    pub fn build(start: Date, end: Date, frequency: Frequency) -> Result<Self, AxisError> {
        if start > end {
            return Err(AxisError::EmptyRange { start, end });
        }

        let mut ticks = Vec::new();
        match frequency.months() {
            Some(months) => {
                let mut i = 0u32;
                loop {
                    let tick = start
                        .into_inner()
                        .checked_add_months(Months::new(i * months))
                        .ok_or_else(|| AxisError::DateOverflow {
                            reason: format!("{start} plus {} months", i * months),
                        })?;
                    if tick > end.into_inner() {
                        break;
                    }
                    ticks.push(Date::from_naive(tick));
                    i += 1;
                }
            }
            None => {
                let step = Days::new(frequency.approx_days());
                let mut current = start.into_inner();
                while current <= end.into_inner() {
                    ticks.push(Date::from_naive(current));
                    current =
                        current
                            .checked_add_days(step)
                            .ok_or_else(|| AxisError::DateOverflow {
                                reason: format!("stepping past {end}"),
                            })?;
                }
            }
        }

        debug_assert!(ticks.windows(2).all(|w| w[0] < w[1]));
        Ok(Self { ticks })
    }

    /// Lays out `n_ticks` ticks around `anchor` with approximate day-count
    /// spacing (see [`Frequency::approx_days`]).
    ///
    /// In `Start` mode the first tick is the anchor itself; in `End` mode
    /// the axis is back-computed so the last tick lands within one
    /// granularity unit of the anchor.
    ///
    /// # Errors
    ///
    /// - [`AxisError::ZeroTicks`] when `n_ticks == 0`
    /// - [`AxisError::DateOverflow`] when stepping leaves the representable
    ///   date range
    ///
    /// # Examples
    ///
    /// ```
    /// use synth_core::axis::{AnchorMode, Frequency, TimeAxis};
    /// use synth_core::types::time::Date;
    ///
    /// let anchor = Date::from_ymd(2021, 6, 1).unwrap();
    /// let axis =
    ///     TimeAxis::from_anchor(5, anchor, AnchorMode::Start, Frequency::Daily).unwrap();
    ///
    /// assert_eq!(axis.first(), anchor);
    /// assert_eq!(axis.last() - anchor, 4);
    /// ```
    pub fn from_anchor(
        n_ticks: usize,
        anchor: Date,
        mode: AnchorMode,
        granularity: Frequency,
    ) -> Result<Self, AxisError> {
        if n_ticks == 0 {
            return Err(AxisError::ZeroTicks);
        }

        let step = granularity.approx_days();
        let first = match mode {
            AnchorMode::Start => anchor.into_inner(),
            AnchorMode::End => anchor
                .into_inner()
                .checked_sub_days(Days::new(step * n_ticks as u64))
                .ok_or_else(|| AxisError::DateOverflow {
                    reason: format!("{anchor} minus {n_ticks} intervals"),
                })?,
        };

        let mut ticks = Vec::with_capacity(n_ticks);
        for i in 0..n_ticks {
            let tick = first
                .checked_add_days(Days::new(step * i as u64))
                .ok_or_else(|| AxisError::DateOverflow {
                    reason: format!("anchor {anchor} plus {i} intervals"),
                })?;
            ticks.push(Date::from_naive(tick));
        }

        debug_assert!(ticks.windows(2).all(|w| w[0] < w[1]));
        Ok(Self { ticks })
    }

    /// Returns the number of ticks.
    #[inline]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    /// Returns whether the axis is empty (never true for a constructed axis).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Returns the first tick.
    #[inline]
    pub fn first(&self) -> Date {
        self.ticks[0]
    }

    /// Returns the last tick.
    #[inline]
    pub fn last(&self) -> Date {
        *self.ticks.last().expect("axis holds at least one tick")
    }

    /// Returns all ticks in ascending order.
    #[inline]
    pub fn dates(&self) -> &[Date] {
        &self.ticks
    }

    /// Returns the tick at `index`, if present.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Date> {
        self.ticks.get(index).copied()
    }

    /// Returns an iterator over the ticks.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.ticks.iter().copied()
    }
}
