pub mod details;
pub mod pagination_bar;
pub mod results_table;
pub mod search_bar;
pub mod status_bar;

pub use details::{DetailsBody, DetailsViewModel};
pub use pagination_bar::PaginationBarViewModel;
pub use results_table::{ResultsContent, ResultsViewModel};
pub use search_bar::SearchBarViewModel;
pub use status_bar::StatusBarViewModel;

/// Compact count for narrow columns: `999`, `12.3k`, `1.2M`
pub fn format_count(count: u64) -> String {
    match count {
        0..=999 => count.to_string(),
        1_000..=999_999 => format!("{:.1}k", count as f64 / 1_000.0),
        _ => format!("{:.1}M", count as f64 / 1_000_000.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1.0k");
        assert_eq!(format_count(12_345), "12.3k");
        assert_eq!(format_count(2_500_000), "2.5M");
    }
}
