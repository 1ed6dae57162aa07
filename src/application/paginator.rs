use crate::domain::errors::DomainError;
use crate::domain::order::PageWindow;

/// Page sizes offered by the limit selector.
pub const ALLOWED_LIMITS: [i64; 4] = [50, 100, 150, 200];

pub const DEFAULT_LIMIT: i64 = 50;

#[derive(Debug, Clone)]
pub struct Paginator {
    window: PageWindow,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            window: PageWindow {
                limit: DEFAULT_LIMIT,
                offset: 0,
            },
        }
    }
}

impl Paginator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Switch page size and go back to the first page.
    pub fn set_limit(&mut self, limit: i64) -> Result<PageWindow, DomainError> {
        if !ALLOWED_LIMITS.contains(&limit) {
            return Err(DomainError::InvalidInput(format!(
                "limit must be one of {:?}, got {}",
                ALLOWED_LIMITS, limit
            )));
        }
        self.window = PageWindow { limit, offset: 0 };
        Ok(self.window)
    }

    /// Unbounded: past the last order the repository just returns nothing.
    pub fn next(&mut self) -> PageWindow {
        self.window.offset += self.window.limit;
        self.window
    }

    pub fn previous(&mut self) -> PageWindow {
        self.window.offset = (self.window.offset - self.window.limit).max(0);
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_page_of_fifty() {
        let p = Paginator::new();
        assert_eq!(
            p.window(),
            PageWindow {
                limit: 50,
                offset: 0
            }
        );
    }

    #[test]
    fn next_advances_by_limit() {
        let mut p = Paginator::new();
        p.next();
        assert_eq!(p.next().offset, 100);
    }

    #[test]
    fn previous_at_zero_is_noop() {
        let mut p = Paginator::new();
        assert_eq!(p.previous(), p.window());
        assert_eq!(p.window().offset, 0);
    }

    #[test]
    fn previous_from_second_page_lands_on_first() {
        let mut p = Paginator::new();
        p.next();
        assert_eq!(p.previous().offset, 0);
        assert_eq!(p.previous().offset, 0);
    }

    #[test]
    fn next_then_previous_round_trips() {
        for limit in ALLOWED_LIMITS {
            let mut p = Paginator::new();
            p.set_limit(limit).expect("allowed limit");
            p.next();
            p.next();
            let before = p.window();
            p.next();
            assert_eq!(p.previous(), before);
        }
    }

    #[test]
    fn set_limit_resets_offset() {
        let mut p = Paginator::new();
        p.next();
        p.next();
        let w = p.set_limit(200).expect("allowed limit");
        assert_eq!(
            w,
            PageWindow {
                limit: 200,
                offset: 0
            }
        );
    }

    #[test]
    fn set_limit_rejects_values_outside_selector() {
        let mut p = Paginator::new();
        p.next();
        let err = p.set_limit(75).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(p.window().offset, 50, "state untouched on rejection");
    }
}
