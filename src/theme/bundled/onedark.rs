//! OneDark - the default dark theme
//! Based on the official OneDark palette: https://github.com/joshdick/onedark.vim

pub const THEME: &str = r##"# OneDark theme for retint
# Based on the official OneDark palette: https://github.com/joshdick/onedark.vim

[meta]
name = "OneDark"
version = 1
author = "retint"

[terminal]
background = "#282c34"
foreground = "#abb2bf"

[styles]
# Base colors
"" = "#abb2bf bg:#282c34"

# Prompt and input
prompt = "#61afef bg:#282c34 bold"
continuation = "#61afef bg:#282c34"
default = "#abb2bf bg:#282c34"

# Output and errors
out = "#abb2bf bg:#282c34"
error = "#e06c75 bg:#282c34"

# Status and toolbars
status-toolbar = "#abb2bf bg:#2c313c"
"status-toolbar.key" = "#61afef bg:#2c313c bold"
"status-toolbar.title" = "#e5c07b bg:#2c313c bold"
bottom-toolbar = "#abb2bf bg:#2c313c"
"bottom-toolbar.key" = "#61afef bg:#2c313c bold"
"bottom-toolbar.title" = "#e5c07b bg:#2c313c bold"

# Line numbers and cursor
line-number = "#636d83 bg:#282c34"
"line-number.current" = "#abb2bf bg:#2c313c bold"
cursor-line = "bg:#2c313c"

# Selection and search
selected = "#abb2bf bg:#3e4451"
search = "#282c34 bg:#e5c07b"
"search.current" = "#282c34 bg:#d19a66 bold"
incremental-search = "#282c34 bg:#98c379"

# Brackets and matching
matching-bracket = "#282c34 bg:#c678dd"
"matching-bracket.other" = "#c678dd bg:#282c34"
"matching-bracket.cursor" = "#282c34 bg:#e06c75"

# Completion menu
completion-menu = "#abb2bf bg:#2c313c"
"completion-menu.completion" = "#abb2bf bg:#2c313c"
"completion-menu.completion.current" = "#282c34 bg:#61afef"
"completion-menu.meta.completion" = "#5c6370 bg:#2c313c"
"completion-menu.meta.completion.current" = "#282c34 bg:#61afef"
"completion-menu.multi-column-meta" = "#5c6370 bg:#2c313c"
"completion-menu.progressbar" = "bg:#61afef"
"completion-menu.progressbar.used" = "bg:#98c379"

# Scrollbars
scrollbar = "bg:#5c6370"
"scrollbar.background" = "bg:#2c313c"
"scrollbar.button" = "bg:#61afef"
"scrollbar.arrow" = "#abb2bf bg:#5c6370"

# Validation and syntax errors
validation-toolbar = "#e06c75 bg:#2c313c"
"validation-toolbar.title" = "#e06c75 bg:#2c313c bold"

# System/shell integration
system-toolbar = "#98c379 bg:#2c313c"

# Auto-suggestion
auto-suggestion = "#5c6370 bg:#282c34"

# Vi mode indicator
vi-mode = "#d19a66 bg:#2c313c bold"

# Docstrings and signatures
docstring = "#5c6370 bg:#282c34 italic"
signature = "#e5c07b bg:#282c34"

# Menu and dialog
menu = "#abb2bf bg:#2c313c"
"menu.border" = "#5c6370"
dialog = "#abb2bf bg:#2c313c"
"dialog.border" = "#5c6370"
"dialog.title" = "#61afef bg:#2c313c bold"

# Tabs
tab = "#abb2bf bg:#2c313c"
"tab.active" = "#282c34 bg:#61afef bold"

# Misc elements
separator = "#5c6370"
"frame.border" = "#5c6370"
"frame.title" = "#e5c07b bg:#282c34 bold"
"##;
