pub mod console;

use std::io::Write;
use std::path::Path;

use unicode_truncate::{Alignment, UnicodeTruncateStr};

use crate::http_probe::result::ProbeResult;
use crate::report::Summary;

pub const GOODBYE: &str = "👋 Thanks for using Website Status Checker!";

const BANNER: &str = r#"
    ╔══════════════════════════════════════════════════════════╗
    ║                                                          ║
    ║                 📡 WEBSITE STATUS CHECKER                ║
    ║                                                          ║
    ║      reachability · response times · plain-text reports  ║
    ║                                                          ║
    ╚══════════════════════════════════════════════════════════╝
"#;

const TARGET_WIDTH: usize = 25;
const STATUS_WIDTH: usize = 15;
const CODE_WIDTH: usize = 8;
const TABLE_WIDTH: usize = 65;

/// Pad or cut `input` to exactly `width` terminal columns.
pub fn to_fixed_width(input: &str, width: usize) -> String {
    input.unicode_pad(width, Alignment::Left, true).into_owned()
}

/// Center `title` in a line of `width` characters filled with `=`.
pub fn section_title(title: &str, width: usize) -> String {
    let len = title.chars().count();
    if len >= width {
        return title.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", "=".repeat(left), title, "=".repeat(right))
}

pub fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
    let _ = std::io::stdout().flush();
}

pub fn print_banner() {
    println!("{BANNER}");
}

pub fn print_section(title: &str) {
    println!("\n{}", section_title(title, 50));
}

pub fn print_menu() {
    print_section("📱 MAIN MENU");
    println!("\n1. 🚀 Check Default Websites");
    println!("2. 📝 Check Custom Websites");
    println!("3. 📖 Load Websites from File");
    println!("4. ℹ️  Tool Information");
    println!("5. 🚪 Exit");
}

pub fn print_info() {
    print_section("ℹ️  TOOL INFORMATION");
    println!(
        r#"
🔧 Website Status Checker
📅 Version: {}

🌟 Features:
• Check website status (Online/Offline)
• Measure response time
• Resolve IP addresses
• Generate detailed reports
• Default, custom and file based website lists

📊 Status Codes:
🟢 ONLINE (200-299) - Website is working
🟡 REDIRECT (300-399) - Website redirected
🔴 CLIENT ERROR (400-499) - Bad request
🔴 SERVER ERROR (500-599) - Server issue
🔴 OFFLINE - Cannot connect
"#,
        env!("CARGO_PKG_VERSION")
    );
}

pub fn table_header() -> String {
    format!(
        "{} {} {} Response Time\n{}",
        to_fixed_width("Website", TARGET_WIDTH),
        to_fixed_width("Status", STATUS_WIDTH),
        to_fixed_width("Code", CODE_WIDTH),
        "-".repeat(TABLE_WIDTH)
    )
}

pub fn progress_row(result: &ProbeResult) -> String {
    format!(
        "{} {} {} {}",
        to_fixed_width(&result.target, TARGET_WIDTH),
        to_fixed_width(&result.category().to_string(), STATUS_WIDTH),
        to_fixed_width(&result.code_text(), CODE_WIDTH),
        result.response_time_text()
    )
}

pub fn print_checking_header() {
    println!("\n{}", section_title("🔍 CHECKING WEBSITES STATUS", 60));
    println!("\n{}", table_header());
}

pub fn print_saved(path: &Path, summary: &Summary) {
    println!("✅ Report saved as: {}", path.display());
    println!(
        "\n📊 Quick Summary: {} Online, {} Offline",
        summary.online, summary.offline
    );
}
