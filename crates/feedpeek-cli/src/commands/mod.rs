pub mod fetch;
pub mod parse;

use feedpeek_core::feed::FeedItem;

const PREVIEW_LEN: usize = 120;

/// Print the item list as headline + indented description preview
pub(crate) fn print_items(items: &[FeedItem]) {
    if items.is_empty() {
        println!("No items in feed.");
        return;
    }

    println!("Items ({}):\n", items.len());

    for item in items {
        let title = if item.title.is_empty() {
            "(no title)"
        } else {
            item.title.as_str()
        };

        println!("  {}", title);
        if !item.description.is_empty() {
            println!("    {}", item.description_preview(PREVIEW_LEN));
        }
        println!();
    }
}
