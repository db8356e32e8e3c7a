//! List site content

use anyhow::Result;

use crate::content::PostStore;
use crate::helpers::date_iso;
use crate::Site;

/// Print every post with its date and source id
pub fn run(site: &Site) -> Result<()> {
    let store = PostStore::new(&site.posts_dir);
    let posts = store.list()?;

    println!("Posts ({}):", posts.len());
    for post in posts {
        let date = post
            .date
            .as_ref()
            .map(date_iso)
            .unwrap_or_else(|| "no date".to_string());
        println!("  {} - {} [{}]", date, post.title, post.id);
    }

    Ok(())
}
