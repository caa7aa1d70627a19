//! Search command.

use rooftop_storefront::controllers::Search;
use rooftop_storefront::error::Result;

/// Print the page a query leads to.
///
/// # Errors
///
/// Returns an error if the query is blank.
pub fn run(query: &str) -> Result<()> {
    let route = Search::new().resolve(query)?;
    println!("{}", route.href());
    Ok(())
}
