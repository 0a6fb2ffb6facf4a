//! Responsive breakpoints and the total per-breakpoint map.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::errors::ParseNameError;

/// One of the six responsive width tiers, in cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Breakpoint {
    #[cfg_attr(feature = "serde", serde(rename = "xs"))]
    Xs,
    #[cfg_attr(feature = "serde", serde(rename = "sm"))]
    Sm,
    #[cfg_attr(feature = "serde", serde(rename = "md"))]
    Md,
    #[cfg_attr(feature = "serde", serde(rename = "lg"))]
    Lg,
    #[cfg_attr(feature = "serde", serde(rename = "xl"))]
    Xl,
    #[cfg_attr(feature = "serde", serde(rename = "2xl"))]
    Xxl,
}

impl Breakpoint {
    /// All breakpoints, smallest first.
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// Position in the cascade (xs = 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Token used in the wire format and in class prefixes.
    pub const fn label(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    /// Minimum viewport width in pixels at which this breakpoint applies.
    pub const fn min_width(self) -> u32 {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 640,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 1024,
            Breakpoint::Xl => 1280,
            Breakpoint::Xxl => 1536,
        }
    }

    /// Human readable width label, e.g. `"≥768px"`.
    pub fn width_label(self) -> String {
        format!("≥{}px", self.min_width())
    }

    /// Utility class prefix. The base breakpoint has none.
    pub const fn prefix(self) -> &'static str {
        match self {
            Breakpoint::Xs => "",
            Breakpoint::Sm => "sm:",
            Breakpoint::Md => "md:",
            Breakpoint::Lg => "lg:",
            Breakpoint::Xl => "xl:",
            Breakpoint::Xxl => "2xl:",
        }
    }

    /// The next smaller breakpoint, if any.
    pub fn prev(self) -> Option<Breakpoint> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// The next larger breakpoint, if any.
    pub fn next(self) -> Option<Breakpoint> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The adjacent breakpoint in the given direction.
    pub fn neighbor(self, direction: Direction) -> Option<Breakpoint> {
        match direction {
            Direction::Smaller => self.prev(),
            Direction::Larger => self.next(),
        }
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Breakpoint::Xs
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Breakpoint {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bp| bp.label() == s)
            .ok_or_else(|| ParseNameError::new("breakpoint", s))
    }
}

/// Direction along the breakpoint cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Towards xs
    Smaller,
    /// Towards 2xl
    Larger,
}

/// A value for every breakpoint.
///
/// There is no fallback lookup: each breakpoint owns an explicit entry.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerBreakpoint<T> {
    pub xs: T,
    pub sm: T,
    pub md: T,
    pub lg: T,
    pub xl: T,
    #[cfg_attr(feature = "serde", serde(rename = "2xl"))]
    pub xxl: T,
}

impl<T> PerBreakpoint<T> {
    /// Build a map by calling `f` once per breakpoint, in cascade order.
    pub fn from_fn(mut f: impl FnMut(Breakpoint) -> T) -> Self {
        Self {
            xs: f(Breakpoint::Xs),
            sm: f(Breakpoint::Sm),
            md: f(Breakpoint::Md),
            lg: f(Breakpoint::Lg),
            xl: f(Breakpoint::Xl),
            xxl: f(Breakpoint::Xxl),
        }
    }

    /// Same value for every breakpoint.
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(|_| value.clone())
    }

    pub fn get(&self, bp: Breakpoint) -> &T {
        match bp {
            Breakpoint::Xs => &self.xs,
            Breakpoint::Sm => &self.sm,
            Breakpoint::Md => &self.md,
            Breakpoint::Lg => &self.lg,
            Breakpoint::Xl => &self.xl,
            Breakpoint::Xxl => &self.xxl,
        }
    }

    pub fn get_mut(&mut self, bp: Breakpoint) -> &mut T {
        match bp {
            Breakpoint::Xs => &mut self.xs,
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
            Breakpoint::Xxl => &mut self.xxl,
        }
    }

    /// Iterate entries in cascade order.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &T)> {
        Breakpoint::ALL.into_iter().map(move |bp| (bp, self.get(bp)))
    }

    /// Transform every entry.
    pub fn map<U>(&self, mut f: impl FnMut(Breakpoint, &T) -> U) -> PerBreakpoint<U> {
        PerBreakpoint::from_fn(|bp| f(bp, self.get(bp)))
    }

    /// Overwrite the entry at `target` with a clone of the entry at `source`.
    pub fn copy_entry(&mut self, source: Breakpoint, target: Breakpoint)
    where
        T: Clone,
    {
        if source != target {
            let value = self.get(source).clone();
            *self.get_mut(target) = value;
        }
    }
}

impl<T> Index<Breakpoint> for PerBreakpoint<T> {
    type Output = T;

    fn index(&self, bp: Breakpoint) -> &T {
        self.get(bp)
    }
}

impl<T> IndexMut<Breakpoint> for PerBreakpoint<T> {
    fn index_mut(&mut self, bp: Breakpoint) -> &mut T {
        self.get_mut(bp)
    }
}
