//! Progress indicator rendering.

/// Width of the proportional bar, in cells.
const BAR_WIDTH: usize = 20;

/// Spinner phases used when the total is unknown.
const SPINNER: [char; 4] = ['-', '\\', '|', '/'];

/// Render a fixed-width progress indicator for the element at `index`
/// (0-based) out of `total` elements.
///
/// With a known total this is a proportional `#`/`.` bar; with an unknown
/// total it degrades to a spinner keyed off `index`, so repeated calls
/// animate without implying an endpoint.
pub fn progress(index: usize, total: Option<usize>) -> String {
    match total {
        Some(0) => "#".repeat(BAR_WIDTH),
        Some(total) => {
            let filled = (index * BAR_WIDTH / total).min(BAR_WIDTH);
            format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
        }
        None => SPINNER[index % SPINNER.len()].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_empty_at_start() {
        assert_eq!(progress(0, Some(10)), ".".repeat(20));
    }

    #[test]
    fn test_bar_half_way() {
        assert_eq!(progress(5, Some(10)), format!("{}{}", "#".repeat(10), ".".repeat(10)));
    }

    #[test]
    fn test_bar_full_at_end() {
        assert_eq!(progress(10, Some(10)), "#".repeat(20));
    }

    #[test]
    fn test_bar_never_overflows() {
        assert_eq!(progress(15, Some(10)), "#".repeat(20));
    }

    #[test]
    fn test_zero_total_renders_full_bar() {
        assert_eq!(progress(0, Some(0)), "#".repeat(20));
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(progress(0, None), "-");
        assert_eq!(progress(1, None), "\\");
        assert_eq!(progress(2, None), "|");
        assert_eq!(progress(3, None), "/");
        assert_eq!(progress(4, None), "-");
    }

    #[test]
    fn test_bar_width_is_stable() {
        for index in 0..10 {
            assert_eq!(progress(index, Some(10)).len(), 20);
        }
    }
}
