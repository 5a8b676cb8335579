//! Helpers for console output shared by the pipeline stages.
use crate::constants::PROGRESS_SPINNER_TEMPLATE;
use crate::{info, logger, success, warn};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a ticking spinner, or a hidden one when output is muted.
pub fn create_progress_spinner(message: &str) -> ProgressBar {
    if logger::is_quiet() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template(PROGRESS_SPINNER_TEMPLATE) {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Human-readable size in binary units: `512 B`, `1.5 KB`, `2.0 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if size < 1024.0 {
            break;
        }
        size /= 1024.0;
        unit = next;
    }
    format!("{:.1} {}", size, unit)
}

/// Size reduction as a percentage; negative when the file grew.
pub fn calculate_compression_ratio(original_size: u64, compressed_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - compressed_size as f64) / original_size as f64) * 100.0
}

pub fn print_compression_result(original_size: u64, compressed_size: u64) {
    let ratio = calculate_compression_ratio(original_size, compressed_size);

    info!(
        "📈 after compress: {} bytes ({})",
        compressed_size,
        format_file_size(compressed_size)
    );

    if ratio > 0.0 {
        success!("Reduced file size by {:.1}%", ratio);
    } else {
        warn!("File size increased by {:.1}%", ratio.abs());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size_units() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024 + 512 * 1024), "3.5 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024 * 1024), "5.0 TB");
    }

    #[test]
    fn test_format_file_size_caps_at_terabytes() {
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024 * 1024), "2048.0 TB");
    }

    #[test]
    fn test_compression_ratio_typical_png() {
        // 1.2 MB merged PNG shrunk to 300 KB
        let ratio = calculate_compression_ratio(1_200_000, 300_000);
        assert!((ratio - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_compression_ratio_grown_or_empty() {
        assert!(calculate_compression_ratio(400, 500) < 0.0);
        assert_eq!(calculate_compression_ratio(0, 10), 0.0);
    }
}
