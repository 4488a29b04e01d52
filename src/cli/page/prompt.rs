use rustyline::{Config, Editor, Result};

pub fn generate_prompt(section: Option<&str>) -> String {
    match section {
        Some(section) => format!("belzig:{section}> "),
        None => "belzig> ".to_string(),
    }
}

pub fn rl() -> Result<Editor<()>> {
    let config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(false)
        .build();
    Editor::with_config(config)
}
