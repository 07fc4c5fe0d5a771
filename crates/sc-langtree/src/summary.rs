//! Console summary printed before the window opens.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use crate::table::{Family, count_languages};

const RULE_WIDTH: usize = 70;

/// The hierarchy levels, root first.
pub fn hierarchy_levels(table: &[Family]) -> [String; 5] {
    [
        "Root (trunk)".to_string(),
        format!("Language Families ({} families)", table.len()),
        "Subfamilies".to_string(),
        "Individual Languages".to_string(),
        "Common Words (leaf nodes)".to_string(),
    ]
}

/// Per-family subfamily and language counts as a table.
pub fn family_table(table: &[Family]) -> Table {
    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["Family", "Subfamilies", "Languages"]);
    for family in table {
        out.add_row(vec![
            family.name.to_string(),
            family.subfamilies.len().to_string(),
            family.language_count().to_string(),
        ]);
    }
    out
}

/// The full summary text.
pub fn render_summary(table: &[Family]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&format!(
        "{rule}\n{}\n{rule}\n",
        "HIERARCHICAL GLOBAL LANGUAGE TREE".bold()
    ));
    out.push_str(&format!(
        "\nDrawing {} languages with hierarchical structure...\n",
        count_languages(table).to_string().green()
    ));

    out.push_str("\nHierarchy Levels:\n");
    for (i, level) in hierarchy_levels(table).iter().enumerate() {
        out.push_str(&format!("  {}. {level}\n", i + 1));
    }

    out.push_str(&format!("\nLanguage Distribution by Family:\n{}\n", family_table(table)));
    out.push_str(&format!(
        "\n{}\n  Arrow keys or mouse wheel to scroll\n  {}\n",
        "Controls:".bold(),
        "Click the window to close".dimmed()
    ));
    out
}
