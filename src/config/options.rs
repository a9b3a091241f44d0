//! Session options applied to the host REPL at startup
//!
//! One typed field per recognized host option, grouped by concern. The
//! whole set is handed to the host in a single `apply_options` call, so
//! the full surface is enumerable and checked at compile time.

use serde::Deserialize;

// ─────────────────────────────────────────────────────────────────────────────
// Option enums
// ─────────────────────────────────────────────────────────────────────────────

/// How the completion menu is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompletionVisualisation {
    None,
    PopUp,
    MultiColumn,
    Toolbar,
}

impl CompletionVisualisation {
    pub fn as_str(self) -> &'static str {
        match self {
            CompletionVisualisation::None => "none",
            CompletionVisualisation::PopUp => "pop-up",
            CompletionVisualisation::MultiColumn => "multi-column",
            CompletionVisualisation::Toolbar => "toolbar",
        }
    }
}

/// Prompt rendering style: ">>>" or numbered "In [1]"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptStyle {
    Classic,
    Ipython,
}

impl PromptStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            PromptStyle::Classic => "classic",
            PromptStyle::Ipython => "ipython",
        }
    }
}

/// Cursor shape; "modal" follows the vi input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorShape {
    Block,
    Underline,
    Beam,
    Modal,
}

impl CursorShape {
    pub fn as_str(self) -> &'static str {
        match self {
            CursorShape::Block => "block",
            CursorShape::Underline => "underline",
            CursorShape::Beam => "beam",
            CursorShape::Modal => "modal",
        }
    }
}

/// Color depth requested from the host renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorDepth {
    OneBit,
    FourBit,
    EightBit,
    TrueColor,
}

impl ColorDepth {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorDepth::OneBit => "one-bit",
            ColorDepth::FourBit => "four-bit",
            ColorDepth::EightBit => "eight-bit",
            ColorDepth::TrueColor => "true-color",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Option groups
// ─────────────────────────────────────────────────────────────────────────────

/// What the session shows and how it renders
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOptions {
    /// Show call signature while completing
    pub show_signature: bool,
    /// Show docstring while completing
    pub show_docstring: bool,
    /// Show the "[Meta+Enter] Execute" hint for multi-line input
    pub show_meta_enter_message: bool,
    /// Line numbers for multi-line input
    pub show_line_numbers: bool,
    pub show_status_bar: bool,
    /// When the sidebar is visible, also show its help text
    pub show_sidebar_help: bool,
    /// Swap light/dark colors
    pub swap_light_and_dark: bool,
    pub highlight_matching_parenthesis: bool,
    /// Wrap long lines instead of scrolling horizontally
    pub wrap_lines: bool,
    pub insert_blank_line_after_output: bool,
    pub prompt_style: PromptStyle,
    pub color_depth: ColorDepth,
    /// Brightness clamp for rendered colors, both in [0, 1]
    pub min_brightness: f64,
    pub max_brightness: f64,
    pub enable_syntax_highlighting: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_signature: true,
            show_docstring: false,
            show_meta_enter_message: true,
            show_line_numbers: true,
            show_status_bar: true,
            show_sidebar_help: true,
            swap_light_and_dark: false,
            highlight_matching_parenthesis: true,
            wrap_lines: true,
            insert_blank_line_after_output: false,
            prompt_style: PromptStyle::Classic,
            color_depth: ColorDepth::TrueColor,
            min_brightness: 0.0,
            max_brightness: 1.0,
            enable_syntax_highlighting: true,
        }
    }
}

/// Completion behavior
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    pub visualisation: CompletionVisualisation,
    /// Scroll offset inside the completion menu (pop-up only)
    pub menu_scroll_offset: u16,
    /// Open the menu without requiring Tab first
    pub complete_while_typing: bool,
    pub enable_fuzzy_completion: bool,
    pub enable_dictionary_completion: bool,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            visualisation: CompletionVisualisation::PopUp,
            menu_scroll_offset: 0,
            complete_while_typing: true,
            enable_fuzzy_completion: false,
            enable_dictionary_completion: false,
        }
    }
}

/// Input and editing behavior
#[derive(Debug, Clone, PartialEq)]
pub struct EditingOptions {
    pub enable_mouse_support: bool,
    /// When on, don't insert whitespace after a newline
    pub paste_mode: bool,
    pub enable_history_search: bool,
    pub enable_auto_suggest: bool,
    /// Open the current input in $EDITOR (C-x C-e / 'v' in vi navigation)
    pub enable_open_in_editor: bool,
    /// System prompt on meta-! plus Control-Z suspend
    pub enable_system_bindings: bool,
    pub confirm_exit: bool,
    pub enable_input_validation: bool,
    pub cursor_shape: CursorShape,
}

impl Default for EditingOptions {
    fn default() -> Self {
        Self {
            enable_mouse_support: true,
            paste_mode: false,
            enable_history_search: false,
            enable_auto_suggest: false,
            enable_open_in_editor: true,
            enable_system_bindings: true,
            confirm_exit: true,
            enable_input_validation: true,
            cursor_shape: CursorShape::Modal,
        }
    }
}

/// Vi editing mode
#[derive(Debug, Clone, PartialEq)]
pub struct ViOptions {
    pub vi_mode: bool,
    /// Start in navigation (normal) mode instead of insert mode
    pub start_in_navigation_mode: bool,
    /// Preserve the last used input mode between main loop iterations
    pub keep_last_used_mode: bool,
}

impl Default for ViOptions {
    fn default() -> Self {
        Self {
            vi_mode: true,
            start_in_navigation_mode: false,
            keep_last_used_mode: false,
        }
    }
}

/// The full set of behavioral options applied once to the host session
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionOptions {
    pub display: DisplayOptions,
    pub completion: CompletionOptions,
    pub editing: EditingOptions,
    pub vi: ViOptions,
}

// ─────────────────────────────────────────────────────────────────────────────
// File configuration mirrors (all fields optional, merged over defaults)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct FileDisplayOptions {
    pub show_signature: Option<bool>,
    pub show_docstring: Option<bool>,
    pub show_meta_enter_message: Option<bool>,
    pub show_line_numbers: Option<bool>,
    pub show_status_bar: Option<bool>,
    pub show_sidebar_help: Option<bool>,
    pub swap_light_and_dark: Option<bool>,
    pub highlight_matching_parenthesis: Option<bool>,
    pub wrap_lines: Option<bool>,
    pub insert_blank_line_after_output: Option<bool>,
    pub prompt_style: Option<PromptStyle>,
    pub color_depth: Option<ColorDepth>,
    pub min_brightness: Option<f64>,
    pub max_brightness: Option<f64>,
    pub enable_syntax_highlighting: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileCompletionOptions {
    pub visualisation: Option<CompletionVisualisation>,
    pub menu_scroll_offset: Option<u16>,
    pub complete_while_typing: Option<bool>,
    pub enable_fuzzy_completion: Option<bool>,
    pub enable_dictionary_completion: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileEditingOptions {
    pub enable_mouse_support: Option<bool>,
    pub paste_mode: Option<bool>,
    pub enable_history_search: Option<bool>,
    pub enable_auto_suggest: Option<bool>,
    pub enable_open_in_editor: Option<bool>,
    pub enable_system_bindings: Option<bool>,
    pub confirm_exit: Option<bool>,
    pub enable_input_validation: Option<bool>,
    pub cursor_shape: Option<CursorShape>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileViOptions {
    pub vi_mode: Option<bool>,
    pub start_in_navigation_mode: Option<bool>,
    pub keep_last_used_mode: Option<bool>,
}

impl DisplayOptions {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileDisplayOptions>) -> Self {
        let file = file.unwrap_or_default();
        let d = Self::default();

        Self {
            show_signature: file.show_signature.unwrap_or(d.show_signature),
            show_docstring: file.show_docstring.unwrap_or(d.show_docstring),
            show_meta_enter_message: file
                .show_meta_enter_message
                .unwrap_or(d.show_meta_enter_message),
            show_line_numbers: file.show_line_numbers.unwrap_or(d.show_line_numbers),
            show_status_bar: file.show_status_bar.unwrap_or(d.show_status_bar),
            show_sidebar_help: file.show_sidebar_help.unwrap_or(d.show_sidebar_help),
            swap_light_and_dark: file.swap_light_and_dark.unwrap_or(d.swap_light_and_dark),
            highlight_matching_parenthesis: file
                .highlight_matching_parenthesis
                .unwrap_or(d.highlight_matching_parenthesis),
            wrap_lines: file.wrap_lines.unwrap_or(d.wrap_lines),
            insert_blank_line_after_output: file
                .insert_blank_line_after_output
                .unwrap_or(d.insert_blank_line_after_output),
            prompt_style: file.prompt_style.unwrap_or(d.prompt_style),
            color_depth: file.color_depth.unwrap_or(d.color_depth),
            min_brightness: file.min_brightness.unwrap_or(d.min_brightness).clamp(0.0, 1.0),
            max_brightness: file.max_brightness.unwrap_or(d.max_brightness).clamp(0.0, 1.0),
            enable_syntax_highlighting: file
                .enable_syntax_highlighting
                .unwrap_or(d.enable_syntax_highlighting),
        }
    }
}

impl CompletionOptions {
    pub fn from_file(file: Option<FileCompletionOptions>) -> Self {
        let file = file.unwrap_or_default();
        let d = Self::default();

        Self {
            visualisation: file.visualisation.unwrap_or(d.visualisation),
            menu_scroll_offset: file.menu_scroll_offset.unwrap_or(d.menu_scroll_offset),
            complete_while_typing: file
                .complete_while_typing
                .unwrap_or(d.complete_while_typing),
            enable_fuzzy_completion: file
                .enable_fuzzy_completion
                .unwrap_or(d.enable_fuzzy_completion),
            enable_dictionary_completion: file
                .enable_dictionary_completion
                .unwrap_or(d.enable_dictionary_completion),
        }
    }
}

impl EditingOptions {
    pub fn from_file(file: Option<FileEditingOptions>) -> Self {
        let file = file.unwrap_or_default();
        let d = Self::default();

        Self {
            enable_mouse_support: file.enable_mouse_support.unwrap_or(d.enable_mouse_support),
            paste_mode: file.paste_mode.unwrap_or(d.paste_mode),
            enable_history_search: file
                .enable_history_search
                .unwrap_or(d.enable_history_search),
            enable_auto_suggest: file.enable_auto_suggest.unwrap_or(d.enable_auto_suggest),
            enable_open_in_editor: file
                .enable_open_in_editor
                .unwrap_or(d.enable_open_in_editor),
            enable_system_bindings: file
                .enable_system_bindings
                .unwrap_or(d.enable_system_bindings),
            confirm_exit: file.confirm_exit.unwrap_or(d.confirm_exit),
            enable_input_validation: file
                .enable_input_validation
                .unwrap_or(d.enable_input_validation),
            cursor_shape: file.cursor_shape.unwrap_or(d.cursor_shape),
        }
    }
}

impl ViOptions {
    pub fn from_file(file: Option<FileViOptions>) -> Self {
        let file = file.unwrap_or_default();
        let d = Self::default();

        Self {
            vi_mode: file.vi_mode.unwrap_or(d.vi_mode),
            start_in_navigation_mode: file
                .start_in_navigation_mode
                .unwrap_or(d.start_in_navigation_mode),
            keep_last_used_mode: file.keep_last_used_mode.unwrap_or(d.keep_last_used_mode),
        }
    }
}
