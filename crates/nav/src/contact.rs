use crate::error::NavError;
use crate::options::ContactOptions;
use docsite_traits::Dom;

/// Writes the de-obfuscated contact address into its element.
pub fn reveal_email<D: Dom>(dom: &mut D, options: &ContactOptions) -> Result<String, NavError> {
    let node = dom.require_element(&options.element_id)?;
    let address = options.obfuscated.replacen(&options.marker, "@", 1);
    dom.set_text_content(&node, &address);
    Ok(address)
}
