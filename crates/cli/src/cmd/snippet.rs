use clap::ValueEnum;
use mdpad_core::config::types::ResolvedConfig;
use mdpad_core::snippets::{self, ImageSpec, Snippet};
use serde::Serialize;

use crate::SnippetArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SnippetName {
    NormalText,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Highlight,
    InlineCode,
    Quote,
    Link,
    Comment,
    Heading,
    Caption,
    CodeBlock,
    BulletedList,
    OrderedList,
    Checklist,
    Tasks,
    Image,
}

/// JSON shape for `--json` output.
#[derive(Debug, Serialize)]
struct SnippetOutput<'a> {
    text: &'a str,
    cursor_back: usize,
}

pub fn run(_config: &ResolvedConfig, args: &SnippetArgs) {
    let selection = args.selection.as_deref();

    let snippet = match args.name {
        SnippetName::NormalText => snippets::normal_text(selection),
        SnippetName::Bold => snippets::bold(selection),
        SnippetName::Italic => snippets::italic(selection),
        SnippetName::Underline => snippets::underline(selection),
        SnippetName::Strikethrough => snippets::strikethrough(selection),
        SnippetName::Highlight => snippets::highlight(selection),
        SnippetName::InlineCode => snippets::inline_code(selection),
        SnippetName::Quote => snippets::quote(selection),
        SnippetName::Link => snippets::link(selection),
        SnippetName::Comment => snippets::comment(),
        SnippetName::Heading => match snippets::heading(args.level, selection) {
            Ok(snippet) => snippet,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(2);
            }
        },
        SnippetName::Caption => snippets::caption(),
        SnippetName::CodeBlock => snippets::code_block(args.lang.as_deref(), selection),
        SnippetName::BulletedList => snippets::bulleted_list(),
        SnippetName::OrderedList => snippets::ordered_list(),
        SnippetName::Checklist => snippets::checklist(),
        SnippetName::Tasks => snippets::tasks(),
        SnippetName::Image => image_snippet(args),
    };

    emit(&snippet, args.json);
}

fn image_snippet(args: &SnippetArgs) -> Snippet {
    let Some(path) = args.path.as_deref() else {
        eprintln!("snippet image requires --path");
        std::process::exit(2);
    };

    // Markdown images default to "alt text", sized HTML images to "image".
    let sized = args.width.is_some() || args.height.is_some();
    let alt = args.alt.as_deref().unwrap_or(if sized { "image" } else { "alt text" });

    snippets::image(&ImageSpec {
        path,
        alt,
        width: args.width.as_deref(),
        height: args.height.as_deref(),
    })
}

fn emit(snippet: &Snippet, json: bool) {
    if json {
        let out =
            SnippetOutput { text: &snippet.text, cursor_back: snippet.cursor_back };
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else if snippet.text.ends_with('\n') {
        print!("{}", snippet.text);
    } else {
        println!("{}", snippet.text);
    }
}
