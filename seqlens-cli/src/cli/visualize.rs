use colored::*;
use seqlens_bio::composition::LengthBin;
use seqlens_bio::GAP;

/// Create an ASCII histogram
pub fn ascii_histogram(data: &[(String, usize)], width: usize, use_color: bool) -> String {
    let mut output = String::new();

    if data.is_empty() {
        return output;
    }

    let max_value = data.iter().map(|(_, v)| *v).max().unwrap_or(1).max(1);
    let max_label_len = data.iter().map(|(s, _)| s.len()).max().unwrap_or(0);

    for (label, value) in data {
        let percentage = (*value as f64 / max_value as f64) * 100.0;
        let bar_width = ((percentage / 100.0) * width as f64) as usize;

        let bar = if use_color {
            match percentage as u32 {
                0..=25 => "█".repeat(bar_width).red().to_string(),
                26..=50 => "█".repeat(bar_width).yellow().to_string(),
                51..=75 => "█".repeat(bar_width).blue().to_string(),
                _ => "█".repeat(bar_width).green().to_string(),
            }
        } else {
            "█".repeat(bar_width)
        };

        let empty = "░".repeat(width.saturating_sub(bar_width));

        output.push_str(&format!(
            "{:>width$} {}{} {:>6}\n",
            label,
            bar,
            empty,
            value,
            width = max_label_len
        ));
    }

    output
}

/// Histogram rows for sequence length bins
pub fn length_histogram_rows(bins: &[LengthBin]) -> Vec<(String, usize)> {
    bins.iter().map(|bin| (bin.label(), bin.count)).collect()
}

/// Create a progress bar
pub fn progress_bar(value: f64, max: f64, width: usize, label: &str, use_color: bool) -> String {
    let percentage = (value / max * 100.0).clamp(0.0, 100.0);
    let filled = ((percentage / 100.0) * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    let bar = if use_color {
        let filled_str = "█".repeat(filled);
        let color_bar = match percentage as u32 {
            0..=25 => filled_str.red(),
            26..=50 => filled_str.yellow(),
            51..=75 => filled_str.blue(),
            _ => filled_str.green(),
        };
        format!("{}{}", color_bar, "░".repeat(empty))
    } else {
        format!("{}{}", "█".repeat(filled), "░".repeat(empty))
    };

    format!("{:<15} {} {:5.1}%", label, bar, percentage)
}

/// One base coloured by identity
pub fn colored_base(base: u8) -> ColoredString {
    let text = (base as char).to_string();
    if base == GAP {
        return text.dimmed();
    }
    match base.to_ascii_uppercase() {
        b'A' => text.green(),
        b'T' => text.red(),
        b'C' => text.blue(),
        b'G' => text.yellow(),
        _ => text.white(),
    }
}

/// First `width` bases coloured, plus `... (<k> more)` when truncated
pub fn sequence_preview(sequence: &[u8], width: usize) -> String {
    let shown = &sequence[..sequence.len().min(width)];
    let mut output: String = shown.iter().map(|&b| colored_base(b).to_string()).collect();

    let hidden = sequence.len() - shown.len();
    if hidden > 0 {
        output.push_str(&format!("... ({} more)", hidden).dimmed().to_string());
    }
    output
}
