use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use pastebox::api::{ConfigAction, PasteboxApi, ShareLinks};
use pastebox::clipboard::copy_to_clipboard;
use pastebox::editor::{edit_content, EditorContent};
use pastebox::error::{PasteboxError, Result};
use pastebox::model::Paste;
use pastebox::notify::{Notification, Notifier, NotifyLevel};
use pastebox::store::fs::FileSlot;
use pastebox::store::PasteStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Prints store notifications as colored one-liners, toast-style.
struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.level {
            NotifyLevel::Success => println!("{}", notification.message.green()),
            NotifyLevel::Error => println!("{}", notification.message.red()),
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = resolve_data_dir(cli.dir)?;
    let slot = FileSlot::new(&data_dir);
    let store = PasteStore::open(slot, TermNotifier)?;
    let mut api = PasteboxApi::new(store, data_dir);

    match cli.command {
        Some(Commands::New {
            title,
            content,
            no_editor,
        }) => handle_new(&mut api, title, content, no_editor),
        Some(Commands::List { search }) => handle_list(&api, search),
        Some(Commands::View { id }) => handle_view(&api, id),
        Some(Commands::Edit {
            id,
            title,
            content,
            no_editor,
        }) => handle_edit(&mut api, id, title, content, no_editor),
        Some(Commands::Delete { ids }) => handle_delete(&mut api, ids),
        Some(Commands::Copy { id }) => handle_copy(&api, id),
        Some(Commands::Share { id }) => handle_share(&api, id),
        Some(Commands::Clear { yes }) => handle_clear(&mut api, yes),
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
        None => handle_list(&api, None),
    }
}

fn resolve_data_dir(overridden: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = overridden {
        return Ok(dir);
    }
    let proj_dirs = ProjectDirs::from("com", "pastebox", "pastebox")
        .ok_or_else(|| PasteboxError::Api("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

type Api = PasteboxApi<FileSlot, TermNotifier>;

fn handle_new(
    api: &mut Api,
    title: Option<String>,
    content: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let (final_title, final_content) = if no_editor {
        (title.unwrap_or_default(), content.unwrap_or_default())
    } else {
        let initial = EditorContent::new(title.unwrap_or_default(), content.unwrap_or_default());
        let edited = edit_content(&initial)?;
        (edited.title, edited.content)
    };

    let result = api.create_paste(final_title, final_content)?;
    if let Some(paste) = result.pastes.first() {
        println!("{}", format!("Id: {}", paste.id).dimmed());
    }
    Ok(())
}

fn handle_list(api: &Api, search: Option<String>) -> Result<()> {
    let result = api.list_pastes(search.as_deref())?;
    print_pastes(&result.pastes);
    Ok(())
}

fn handle_view(api: &Api, id: String) -> Result<()> {
    let result = api.view_paste(&id)?;
    if let Some(paste) = result.pastes.first() {
        print_full_paste(paste);
    }
    Ok(())
}

fn handle_edit(
    api: &mut Api,
    id: String,
    title: Option<String>,
    content: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let existing = api
        .view_paste(&id)
        .ok()
        .and_then(|r| r.pastes.into_iter().next());
    let (initial_title, initial_content) = match &existing {
        Some(paste) => (paste.title.clone(), paste.content.clone()),
        // Unknown id: still dispatch the update so the store reports
        // "Paste not found" the same way the store always does.
        None => (
            title.clone().unwrap_or_default(),
            content.clone().unwrap_or_default(),
        ),
    };

    let (final_title, final_content) = if no_editor {
        (
            title.unwrap_or(initial_title),
            content.unwrap_or(initial_content),
        )
    } else {
        let edited = edit_content(&EditorContent::new(initial_title, initial_content))?;
        (edited.title, edited.content)
    };

    api.update_paste(&id, final_title, final_content)?;
    Ok(())
}

fn handle_delete(api: &mut Api, ids: Vec<String>) -> Result<()> {
    for id in &ids {
        api.delete_paste(id)?;
    }
    Ok(())
}

fn handle_copy(api: &Api, id: String) -> Result<()> {
    let result = api.view_paste(&id)?;
    if let Some(paste) = result.pastes.first() {
        copy_to_clipboard(&paste.content)?;
        println!("{}", "Copied to clipboard".green());
    }
    Ok(())
}

fn handle_share(api: &Api, id: String) -> Result<()> {
    let result = api.share_paste(&id)?;
    if let Some(links) = result.links {
        print_share_links(&links);
    }
    Ok(())
}

fn handle_clear(api: &mut Api, yes: bool) -> Result<()> {
    if !yes {
        println!("This deletes every paste. Pass --yes to confirm.");
        return Ok(());
    }
    api.clear_pastes()?;
    println!("All pastes cleared.");
    Ok(())
}

fn handle_config(api: &Api, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("share-url"), None) => ConfigAction::ShowKey("share-url".to_string()),
        (Some("share-url"), Some(v)) => ConfigAction::SetShareUrl(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        println!("share-url = {}", config.share_url());
    }
    Ok(())
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn print_pastes(pastes: &[Paste]) {
    if pastes.is_empty() {
        println!("No pastes found.");
        return;
    }

    let id_width = pastes.iter().map(|p| p.id.width()).max().unwrap_or(0);

    for paste in pastes {
        let id_col = format!("{:>width$}  ", paste.id, width = id_width);
        let time_ago = format_time_ago(paste.created_at);

        let preview: String = paste
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let line = if preview.is_empty() {
            paste.title.clone()
        } else {
            format!("{} {}", paste.title, preview)
        };

        let fixed_width = 2 + id_col.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let display = truncate_to_width(&line, available);
        let padding = available.saturating_sub(display.width());

        println!(
            "  {}{}{}{}",
            id_col.dimmed(),
            display,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

fn print_full_paste(paste: &Paste) {
    println!("{} {}", paste.id.yellow(), paste.title.bold());
    println!("--------------------------------");
    println!("{}", paste.content);
    println!();
    println!("{}", format_date(paste.created_at).dimmed());
}

fn print_share_links(links: &ShareLinks) {
    println!("{} {}", "Link:".bold(), links.url);
    println!("WhatsApp: {}", links.whatsapp);
    println!("Twitter:  {}", links.twitter);
    println!("Facebook: {}", links.facebook);
    println!("Email:    {}", links.email);
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

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
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}
