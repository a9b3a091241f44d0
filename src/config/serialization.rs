//! Config serialization to TOML
//!
//! Single source of truth for the config file format. The generated file
//! doubles as documentation: every option is written out with a comment,
//! so a fresh config is the discovery surface for the whole option set.

use super::Config;

impl Config {
    /// Generate the full config file content from current values
    pub fn to_toml(&self) -> String {
        let d = &self.options.display;
        let c = &self.options.completion;
        let e = &self.options.editing;
        let v = &self.options.vi;

        format!(
            r#"# retint configuration
# Edit and restart; delete this file to restore defaults.
#
# The startup theme is always OneDark. Toggle to PaperColor Light at
# runtime with Ctrl+T Ctrl+T.

# Print the startup banner before the session starts.
show_banner = {show_banner}

[display]
# Show the call signature while completing.
show_signature = {show_signature}
# Show the docstring while completing.
show_docstring = {show_docstring}
# Show the "[Meta+Enter] Execute" hint when Enter only inserts a newline.
show_meta_enter_message = {show_meta_enter_message}
# Show line numbers when the input spans multiple lines.
show_line_numbers = {show_line_numbers}
show_status_bar = {show_status_bar}
# When the sidebar is visible, also show its help text.
show_sidebar_help = {show_sidebar_help}
# Swap light and dark colors.
swap_light_and_dark = {swap_light_and_dark}
highlight_matching_parenthesis = {highlight_matching_parenthesis}
# Wrap long lines instead of scrolling horizontally.
wrap_lines = {wrap_lines}
insert_blank_line_after_output = {insert_blank_line_after_output}
# "classic" shows ">>>", "ipython" shows "In [1]".
prompt_style = "{prompt_style}"
# "one-bit", "four-bit", "eight-bit" or "true-color".
color_depth = "{color_depth}"
# Brightness clamp for rendered colors, both in [0, 1].
min_brightness = {min_brightness}
max_brightness = {max_brightness}
enable_syntax_highlighting = {enable_syntax_highlighting}

[completion]
# "none", "pop-up", "multi-column" or "toolbar".
visualisation = "{visualisation}"
# Scroll offset inside the pop-up completion menu.
menu_scroll_offset = {menu_scroll_offset}
# Open the completion menu without requiring Tab first.
complete_while_typing = {complete_while_typing}
enable_fuzzy_completion = {enable_fuzzy_completion}
enable_dictionary_completion = {enable_dictionary_completion}

[editing]
enable_mouse_support = {enable_mouse_support}
# When on, don't insert whitespace after a newline.
paste_mode = {paste_mode}
enable_history_search = {enable_history_search}
enable_auto_suggest = {enable_auto_suggest}
# Open the current input in $EDITOR (C-x C-e, or 'v' in vi navigation mode).
enable_open_in_editor = {enable_open_in_editor}
# System prompt on meta-!, plus Control-Z suspend.
enable_system_bindings = {enable_system_bindings}
# Ask for confirmation on exit.
confirm_exit = {confirm_exit}
enable_input_validation = {enable_input_validation}
# "block", "underline", "beam", or "modal" to follow the vi input mode.
cursor_shape = "{cursor_shape}"

[vi]
vi_mode = {vi_mode}
# Start in navigation (normal) mode instead of insert mode.
start_in_navigation_mode = {start_in_navigation_mode}
# Preserve the last used input mode between main loop iterations.
keep_last_used_mode = {keep_last_used_mode}

[logging]
# "error", "warn", "info", "debug" or "trace". RUST_LOG overrides this.
level = "{level}"
"#,
            show_banner = self.show_banner,
            show_signature = d.show_signature,
            show_docstring = d.show_docstring,
            show_meta_enter_message = d.show_meta_enter_message,
            show_line_numbers = d.show_line_numbers,
            show_status_bar = d.show_status_bar,
            show_sidebar_help = d.show_sidebar_help,
            swap_light_and_dark = d.swap_light_and_dark,
            highlight_matching_parenthesis = d.highlight_matching_parenthesis,
            wrap_lines = d.wrap_lines,
            insert_blank_line_after_output = d.insert_blank_line_after_output,
            prompt_style = d.prompt_style.as_str(),
            color_depth = d.color_depth.as_str(),
            min_brightness = format_float(d.min_brightness),
            max_brightness = format_float(d.max_brightness),
            enable_syntax_highlighting = d.enable_syntax_highlighting,
            visualisation = c.visualisation.as_str(),
            menu_scroll_offset = c.menu_scroll_offset,
            complete_while_typing = c.complete_while_typing,
            enable_fuzzy_completion = c.enable_fuzzy_completion,
            enable_dictionary_completion = c.enable_dictionary_completion,
            enable_mouse_support = e.enable_mouse_support,
            paste_mode = e.paste_mode,
            enable_history_search = e.enable_history_search,
            enable_auto_suggest = e.enable_auto_suggest,
            enable_open_in_editor = e.enable_open_in_editor,
            enable_system_bindings = e.enable_system_bindings,
            confirm_exit = e.confirm_exit,
            enable_input_validation = e.enable_input_validation,
            cursor_shape = e.cursor_shape.as_str(),
            vi_mode = v.vi_mode,
            start_in_navigation_mode = v.start_in_navigation_mode,
            keep_last_used_mode = v.keep_last_used_mode,
            level = self.logging.level,
        )
    }
}

/// Render a float so TOML keeps it a float ("0" would parse as integer)
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
