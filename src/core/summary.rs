//! Fixed console summary printed after a successful migration.

const SUMMARY_LINES: [&str; 10] = [
    "✅ Workflow transformation complete!",
    "",
    "📋 Changes made:",
    "  • Removed ValidateInput IF wrapper - schema validation at trigger handles this",
    "  • Removed ValidateAllEmployees loop - redundant validation",
    "  • Removed ValidationErrorResponse - trigger fails fast on invalid schema",
    "  • Replaced Check/Update/Insert logic with stored procedure call",
    "  • Simplified workflow from 640 to ~250 lines",
    "",
    "🎯 Result: Clean, maintainable workflow with fail-fast validation",
];

pub fn render_summary() -> String {
    SUMMARY_LINES.join("\n")
}

pub fn print_summary() {
    println!("{}", render_summary());
}
