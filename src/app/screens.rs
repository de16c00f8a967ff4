//! Screen definitions and the menus built for each of them
//!
//! Every render builds its menu from scratch out of the current session, so a
//! directory change or a removed file is reflected the next time a screen is
//! shown.

use std::rc::Rc;

use anyhow::Result;
use log::debug;

use super::labels::*;
use super::App;
use crate::actions::compress::quality_from_input;
use crate::actions::fs::describe_extensions;
use crate::actions::{
    compress_all, compress_image, convert_file, files_with_extensions, list_files,
    remove_matching, ConversionKind, NameFilter, IMAGE_EXTENSIONS,
};
use crate::menu::validate::{directory_exists, in_range, not_empty, numeric};
use crate::menu::{Confirmation, Console, Interactive, Menu, Transition, ValidatedInput};
use crate::report::CompressionSummary;
use crate::utils::{
    format_bytes, header_lines, info_line, listing_heading, removed_line, success_line, title_line,
};

/// Every screen the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    Convert(ConversionKind),
    CompressImages,
    RemoveGroup,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Main => "Main menu",
            Screen::Convert(kind) => kind.title(),
            Screen::CompressImages => COMPRESS_IMAGES,
            Screen::RemoveGroup => REMOVE_GROUP,
        }
    }
}

/// Navigation request returned by every action
pub type Step = Transition<Screen>;

/// Menu type produced for a screen
pub type ScreenMenu<'a, K> = Menu<'a, App<K>, Step>;

/// Build the menu for `screen`; `crumbs` are the titles from the root down
pub fn build<'a, K: Console + 'a>(
    screen: Screen,
    app: &App<K>,
    crumbs: &[&str],
) -> Result<ScreenMenu<'a, K>> {
    match screen {
        Screen::Main => Ok(main_menu(app.config().clear_screen)),
        Screen::Convert(kind) => convert_menu(kind, app, crumbs),
        Screen::CompressImages => compress_menu(app, crumbs),
        Screen::RemoveGroup => remove_menu(app, crumbs),
    }
}

/// Pre-render hook printing fixed lines, optionally after clearing
fn print_header<'a, K: Console + 'a>(
    clear: bool,
    lines: Vec<String>,
) -> impl FnOnce(&mut App<K>) -> Result<()> + 'a {
    move |app: &mut App<K>| {
        let console = app.console();
        if clear {
            console.clear()?;
        }
        for line in &lines {
            console.line(line)?;
        }
        Ok(())
    }
}

fn main_menu<'a, K: Console + 'a>(clear: bool) -> ScreenMenu<'a, K> {
    let mut menu = Menu::new()
        .on_render(move |app: &mut App<K>| {
            let lines = header_lines(app.session().cwd());
            print_header::<K>(clear, lines)(app)
        })
        .echo_selection(true);

    menu.push(CHANGE_DIR, |app: &mut App<K>| {
        change_dir(app)?;
        Ok(Transition::Stay)
    });
    menu.push(PDF_TO_DOCX, |_: &mut App<K>| {
        Ok(Transition::Push(Screen::Convert(ConversionKind::PdfToDocx)))
    });
    menu.push(DOCX_TO_PDF, |_: &mut App<K>| {
        Ok(Transition::Push(Screen::Convert(ConversionKind::DocxToPdf)))
    });
    menu.push(COMPRESS_IMAGES, |_: &mut App<K>| {
        Ok(Transition::Push(Screen::CompressImages))
    });
    menu.push(REMOVE_GROUP, |_: &mut App<K>| {
        Ok(Transition::Push(Screen::RemoveGroup))
    });
    menu.push(EXIT, |_: &mut App<K>| Ok(Transition::Exit));
    menu
}

/// Ask for confirmation, then for a new directory, and move the session there
fn change_dir<K: Console>(app: &mut App<K>) -> Result<()> {
    let target = Confirmation::new(CHANGE_DIR_QUESTION).ask(
        app,
        |app: &mut App<K>| {
            let base = app.session().cwd().to_path_buf();
            ValidatedInput::new(PATH_PROMPT)
                .validator(directory_exists(base))
                .on_success(|| debug!("New directory accepted"))
                .interact(app.console())
                .map(Some)
        },
        |_: &mut App<K>| Ok(None),
    )?;

    if let Some(path) = target {
        let line = {
            let cwd = app.session_mut().change_dir(&path)?;
            success_line(&format!("Working directory is now {}", cwd.display()))
        };
        app.console().line(&line)?;
    }
    Ok(())
}

fn convert_menu<'a, K: Console + 'a>(
    kind: ConversionKind,
    app: &App<K>,
    crumbs: &[&str],
) -> Result<ScreenMenu<'a, K>> {
    let files = files_with_extensions(app.session().cwd(), &[kind.source_extension()])?;

    let mut menu = Menu::new().on_render(print_header::<K>(
        app.config().clear_screen,
        vec![
            title_line(crumbs),
            listing_heading(Some(kind.source_extension())),
            String::new(),
        ],
    ));

    if files.is_empty() {
        menu.push_disabled(NO_FILES);
    }
    for name in files {
        menu.push(name.clone(), move |app: &mut App<K>| {
            let dir = app.session().cwd().to_path_buf();
            let output = convert_file(app.converter(), kind, &dir, &name)?;
            let line = success_line(&format!("Created {}", output.display()));
            app.console().line(&line)?;
            Ok(Transition::Home)
        });
    }
    menu.push(BACK, |_: &mut App<K>| Ok(Transition::Back));
    Ok(menu)
}

/// Prompt for a compression quality until a number in 0..=100 is entered
fn ask_quality<K: Console>(app: &mut App<K>) -> Result<u8> {
    let input = ValidatedInput::new(QUALITY_PROMPT)
        .validator(numeric())
        .validator(not_empty())
        .validator(in_range(0.0, 100.0))
        .interact(app.console())?;
    quality_from_input(&input)
}

fn compress_menu<'a, K: Console + 'a>(app: &App<K>, crumbs: &[&str]) -> Result<ScreenMenu<'a, K>> {
    let files = files_with_extensions(app.session().cwd(), IMAGE_EXTENSIONS)?;

    let mut menu = Menu::new().on_render(print_header::<K>(
        app.config().clear_screen,
        vec![
            title_line(crumbs),
            listing_heading(Some(&describe_extensions(IMAGE_EXTENSIONS))),
            String::new(),
        ],
    ));

    for name in &files {
        let name = name.clone();
        menu.push(name.clone(), move |app: &mut App<K>| {
            let quality = ask_quality(app)?;
            let dir = app.session().cwd().to_path_buf();
            let report = compress_image(&dir, &name, quality)?;
            let line = success_line(&format!(
                "Saved {} ({} -> {})",
                report.output.display(),
                format_bytes(report.original_bytes),
                format_bytes(report.compressed_bytes)
            ));
            app.console().line(&line)?;
            Ok(Transition::Home)
        });
    }

    let no_files = files.is_empty();
    if no_files {
        menu.push_disabled(NO_FILES);
    }
    let compress_all_id = menu.push(COMPRESS_ALL, move |app: &mut App<K>| {
        let quality = ask_quality(app)?;
        let dir = app.session().cwd().to_path_buf();
        let reports = compress_all(&dir, &files, quality)?;
        for line in CompressionSummary::new(quality, reports).lines() {
            app.console().line(&line)?;
        }
        Ok(Transition::Home)
    });
    if no_files {
        menu.disable(compress_all_id)?;
    }
    menu.push(BACK, |_: &mut App<K>| Ok(Transition::Back));
    Ok(menu)
}

/// Action asking for a pattern and removing every listed file it matches
fn remove_action<'a, K: Console + 'a>(
    files: Rc<Vec<String>>,
    prompt: &'static str,
    make_filter: fn(String) -> NameFilter,
) -> impl FnOnce(&mut App<K>) -> Result<Step> + 'a {
    move |app: &mut App<K>| {
        let pattern = ValidatedInput::new(prompt)
            .validator(not_empty())
            .interact(app.console())?;
        let filter = make_filter(pattern);

        let dir = app.session().cwd().to_path_buf();
        let removed = remove_matching(&dir, &files, &filter)?;

        let console = app.console();
        if removed.is_empty() {
            console.line(&info_line(&format!("No files {}", filter)))?;
        }
        for name in &removed {
            console.line(&removed_line(name))?;
        }
        Ok(Transition::Home)
    }
}

fn remove_menu<'a, K: Console + 'a>(app: &App<K>, crumbs: &[&str]) -> Result<ScreenMenu<'a, K>> {
    let files = Rc::new(list_files(app.session().cwd())?);

    let mut menu = Menu::new().on_render(print_header::<K>(
        app.config().clear_screen,
        vec![
            title_line(crumbs),
            listing_heading(None),
            info_line(&format!("{} file(s)", files.len())),
            String::new(),
        ],
    ));

    menu.push(
        REMOVE_STARTS_WITH,
        remove_action::<K>(Rc::clone(&files), SUBSTRING_PROMPT, NameFilter::StartsWith),
    );
    menu.push(
        REMOVE_ENDS_WITH,
        remove_action::<K>(Rc::clone(&files), SUBSTRING_PROMPT, NameFilter::EndsWith),
    );
    menu.push(
        REMOVE_CONTAINS,
        remove_action::<K>(Rc::clone(&files), SUBSTRING_PROMPT, NameFilter::Contains),
    );
    menu.push(
        REMOVE_BY_EXTENSION,
        remove_action::<K>(files, EXTENSION_PROMPT, NameFilter::Extension),
    );
    menu.push(BACK, |_: &mut App<K>| Ok(Transition::Back));
    Ok(menu)
}
