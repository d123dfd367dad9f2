use chrono::{DateTime, Utc};
use colored::Colorize;
use recipebox::api::{CmdMessage, MessageLevel};
use recipebox::error::{RecipeBoxError, Result};
use recipebox::index::DisplayRecipe;
use std::io::{self, Write};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 14;
const FAVORITE_MARKER: &str = "♥";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_recipes(recipes: &[DisplayRecipe]) {
    if recipes.is_empty() {
        println!("No recipes yet. Add one with `recipebox add`.");
        return;
    }

    for dr in recipes {
        let idx_str = format!("{}. ", dr.index);
        let marker = if dr.favorite {
            format!("{} ", FAVORITE_MARKER)
        } else {
            "  ".to_string()
        };

        let fixed_width = idx_str.width() + marker.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let title_display = truncate_to_width(&dr.recipe.title, available);
        let padding = available.saturating_sub(title_display.width());

        let marker_colored = if dr.favorite {
            marker.red()
        } else {
            marker.normal()
        };

        println!(
            "{}{}{}{}{}",
            idx_str.yellow(),
            marker_colored,
            title_display,
            " ".repeat(padding),
            format_time_ago(dr.recipe.created_at).dimmed()
        );
    }
}

pub(super) fn print_full_recipes(recipes: &[DisplayRecipe]) {
    for (i, dr) in recipes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let marker = if dr.favorite {
            format!(" {}", FAVORITE_MARKER.red())
        } else {
            String::new()
        };
        println!(
            "{} {}{}",
            dr.index.to_string().yellow(),
            dr.recipe.title.bold(),
            marker
        );
        println!("--------------------------------");
        if !dr.recipe.image.is_empty() {
            println!("{} {}", "Image:".dimmed(), dr.recipe.image);
        }
        if !dr.recipe.description.is_empty() {
            println!("{}", dr.recipe.description);
        }
        println!(
            "{}",
            format!("Added {}", format_time_ago(dr.recipe.created_at)).dimmed()
        );
    }
}

/// Ask a yes/no question on the terminal. Defaults to no.
pub(super) fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush().map_err(RecipeBoxError::Io)?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(RecipeBoxError::Io)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    if s.width() <= max_width {
        return s.to_string();
    }

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
