//! PaperColor Light - the light counterpart to OneDark
//! Based on the official PaperColor palette: https://github.com/NLKNguyen/papercolor-theme

pub const THEME: &str = r##"# PaperColor Light theme for retint
# Based on the official PaperColor palette: https://github.com/NLKNguyen/papercolor-theme

[meta]
name = "PaperColor Light"
version = 1
author = "retint"

[terminal]
background = "#eeeeee"
foreground = "#444444"

[styles]
# Base colors
"" = "#444444 bg:#eeeeee"

# Prompt and input
prompt = "#0087af bg:#eeeeee bold"
continuation = "#0087af bg:#eeeeee"
default = "#444444 bg:#eeeeee"

# Output and errors
out = "#444444 bg:#eeeeee"
error = "#af0000 bg:#eeeeee"

# Status and toolbars
status-toolbar = "#444444 bg:#d0d0d0"
"status-toolbar.key" = "#0087af bg:#d0d0d0 bold"
"status-toolbar.title" = "#5f8700 bg:#d0d0d0 bold"
bottom-toolbar = "#444444 bg:#d0d0d0"
"bottom-toolbar.key" = "#0087af bg:#d0d0d0 bold"
"bottom-toolbar.title" = "#5f8700 bg:#d0d0d0 bold"

# Line numbers and cursor
line-number = "#878787 bg:#eeeeee"
"line-number.current" = "#444444 bg:#d0d0d0 bold"
cursor-line = "bg:#d0d0d0"

# Selection and search
selected = "#444444 bg:#bcbcbc"
search = "#eeeeee bg:#5f8700"
"search.current" = "#eeeeee bg:#d75f00 bold"
incremental-search = "#eeeeee bg:#008700"

# Brackets and matching
matching-bracket = "#eeeeee bg:#8700af"
"matching-bracket.other" = "#8700af bg:#eeeeee"
"matching-bracket.cursor" = "#eeeeee bg:#af0000"

# Completion menu
completion-menu = "#444444 bg:#d0d0d0"
"completion-menu.completion" = "#444444 bg:#d0d0d0"
"completion-menu.completion.current" = "#eeeeee bg:#0087af"
"completion-menu.meta.completion" = "#878787 bg:#d0d0d0"
"completion-menu.meta.completion.current" = "#eeeeee bg:#0087af"
"completion-menu.multi-column-meta" = "#878787 bg:#d0d0d0"
"completion-menu.progressbar" = "bg:#0087af"
"completion-menu.progressbar.used" = "bg:#008700"

# Scrollbars
scrollbar = "bg:#878787"
"scrollbar.background" = "bg:#d0d0d0"
"scrollbar.button" = "bg:#0087af"
"scrollbar.arrow" = "#444444 bg:#878787"

# Validation and syntax errors
validation-toolbar = "#af0000 bg:#d0d0d0"
"validation-toolbar.title" = "#af0000 bg:#d0d0d0 bold"

# System/shell integration
system-toolbar = "#008700 bg:#d0d0d0"

# Auto-suggestion
auto-suggestion = "#878787 bg:#eeeeee"

# Vi mode indicator
vi-mode = "#d75f00 bg:#d0d0d0 bold"

# Docstrings and signatures
docstring = "#878787 bg:#eeeeee italic"
signature = "#5f8700 bg:#eeeeee"

# Menu and dialog
menu = "#444444 bg:#d0d0d0"
"menu.border" = "#878787"
dialog = "#444444 bg:#d0d0d0"
"dialog.border" = "#878787"
"dialog.title" = "#0087af bg:#d0d0d0 bold"

# Tabs
tab = "#444444 bg:#d0d0d0"
"tab.active" = "#eeeeee bg:#0087af bold"

# Misc elements
separator = "#878787"
"frame.border" = "#878787"
"frame.title" = "#5f8700 bg:#eeeeee bold"
"##;
