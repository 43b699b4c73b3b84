use std::collections::HashMap;

/// Section label that accumulates continuation lines.
pub const INSTRUCTIONS_LABEL: &str = "Instructions";

/// Section label carrying the recipe's display name.
pub const RECIPE_NAME_LABEL: &str = "Recipe Name";

/// Sections parsed out of a recipe's labeled instruction text.
///
/// The text is line-oriented: a line containing `:` starts a new section
/// named by everything before the first colon (trimmed), with everything
/// after it (trimmed) as the value. A line without a colon continues the
/// current section, but only while that section is `Instructions`.
///
/// Continuation lines are joined with `\n`, so when the `Instructions:`
/// label line itself carries no text the accumulated value starts with a
/// leading newline. The step splitter drops the resulting empty segment,
/// and downstream code relies on the value staying exactly like this, so
/// the quirk is preserved rather than trimmed away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInstructions {
    sections: HashMap<String, String>,
}

impl ParsedInstructions {
    /// Parses a raw instructions blob. Total: any input, including an empty
    /// or colon-free string, yields a mapping without error. Repeating a
    /// label overwrites its earlier value.
    pub fn parse(raw: &str) -> Self {
        let mut sections: HashMap<String, String> = HashMap::new();
        let mut current: Option<String> = None;

        for line in raw.lines() {
            if let Some((label, value)) = line.split_once(':') {
                let label = label.trim().to_string();
                sections.insert(label.clone(), value.trim().to_string());
                current = Some(label);
            } else if current.as_deref() == Some(INSTRUCTIONS_LABEL) {
                let entry = sections.entry(INSTRUCTIONS_LABEL.to_string()).or_default();
                entry.push('\n');
                entry.push_str(line.trim());
            }
        }

        ParsedInstructions { sections }
    }

    /// Value of an arbitrary section, if present.
    pub fn section(&self, label: &str) -> Option<&str> {
        self.sections.get(label).map(String::as_str)
    }

    /// The `Recipe Name` section, if present.
    pub fn recipe_name(&self) -> Option<&str> {
        self.section(RECIPE_NAME_LABEL)
    }

    /// The accumulated `Instructions` section, or an empty string when the
    /// blob had none. Callers of [`split_steps`] go through this accessor so
    /// an absent section never reaches the splitter.
    pub fn instructions(&self) -> &str {
        self.section(INSTRUCTIONS_LABEL).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Splits accumulated instruction text into ordered steps.
///
/// Every newline and every period acts as a delimiter on its own;
/// consecutive delimiters collapse because empty segments are dropped after
/// trimming.
pub fn split_steps(text: &str) -> Vec<String> {
    text.split(['\n', '.'])
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(str::to_string)
        .collect()
}

/// Upper-cases only the first character, leaving the rest unchanged.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
