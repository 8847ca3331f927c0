//! Rows per page

use crate::error::InvalidPageSize;
use std::fmt;

/// Number of repositories requested per page
///
/// Restricted to the sizes offered in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(u32);

impl PageSize {
    pub const ALLOWED: [u32; 5] = [10, 20, 30, 40, 50];

    pub const DEFAULT: PageSize = PageSize(10);

    pub fn get(self) -> u32 {
        self.0
    }

    /// Next larger size, stays at the largest
    pub fn larger(self) -> Self {
        Self::ALLOWED
            .iter()
            .copied()
            .find(|&size| size > self.0)
            .map(PageSize)
            .unwrap_or(self)
    }

    /// Next smaller size, stays at the smallest
    pub fn smaller(self) -> Self {
        Self::ALLOWED
            .iter()
            .rev()
            .copied()
            .find(|&size| size < self.0)
            .map(PageSize)
            .unwrap_or(self)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if Self::ALLOWED.contains(&value) {
            Ok(PageSize(value))
        } else {
            Err(InvalidPageSize(value))
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from() {
        for size in PageSize::ALLOWED {
            assert_eq!(PageSize::try_from(size).unwrap().get(), size);
        }
        assert_eq!(PageSize::try_from(0), Err(InvalidPageSize(0)));
        assert_eq!(PageSize::try_from(25), Err(InvalidPageSize(25)));
        assert_eq!(PageSize::try_from(100), Err(InvalidPageSize(100)));
    }

    #[test]
    fn test_cycling_saturates() {
        assert_eq!(PageSize::DEFAULT.larger().get(), 20);
        assert_eq!(PageSize::DEFAULT.smaller().get(), 10);

        let largest = PageSize::try_from(50).unwrap();
        assert_eq!(largest.larger(), largest);
        assert_eq!(largest.smaller().get(), 40);
    }
}
