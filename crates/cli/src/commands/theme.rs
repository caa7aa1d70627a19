//! Theme commands.

use rooftop_core::Theme;
use rooftop_storefront::controllers::DarkMode;

use super::Context;

fn print_theme(dark_mode: &DarkMode) {
    let theme = dark_mode.theme();
    println!("{} {theme}", theme.toggle_icon());
}

/// Print the saved theme.
pub fn show(ctx: &Context) {
    print_theme(&DarkMode::new(ctx.store.clone()));
}

/// Switch to the other theme.
pub fn toggle(ctx: &Context) {
    let mut dark_mode = DarkMode::new(ctx.store.clone());
    dark_mode.toggle();
    print_theme(&dark_mode);
}

pub fn set(ctx: &Context, theme: Theme) {
    let mut dark_mode = DarkMode::new(ctx.store.clone());
    dark_mode.set(theme);
    print_theme(&dark_mode);
}
