//! Initialize a new blog site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Site;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("posts"))?;
    fs::create_dir_all(target_dir.join("static"))?;

    let config_content = r#"# Site
title: My Blog
author: John Doe
description: ''
language: en

# URL
url: http://example.com

# Directory
posts_dir: posts
static_dir: static
output_dir: public
"#;

    fs::write(target_dir.join("blog.yml"), config_content)?;

    let now = chrono::Local::now();
    let sample_post = format!(
        r#"---
title: Hello World
date: '{}'
---

Welcome to your new blog. This is your very first post.

## Writing

Drop Markdown files into `posts/`. The part of the filename before the
extension becomes the post's URL: this file is served at `/posts/hello-world/`.

## Generating

```bash
$ minipress generate
```

## Previewing

```bash
$ minipress serve
```
"#,
        now.format("%Y-%m-%d")
    );

    fs::write(target_dir.join("posts/hello-world.md"), sample_post)?;

    Ok(())
}

/// Run the init command with an existing site instance
pub fn run(site: &Site) -> Result<()> {
    init_site(&site.base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_layout() {
        let tmp = TempDir::new().unwrap();
        init_site(tmp.path()).unwrap();

        assert!(tmp.path().join("blog.yml").exists());
        assert!(tmp.path().join("posts/hello-world.md").exists());
        assert!(tmp.path().join("static").is_dir());

        // The scaffolded site loads and generates cleanly
        let site = Site::new(tmp.path()).unwrap();
        site.generate().unwrap();
        assert!(site.output_dir.join("posts/hello-world/index.html").exists());
    }
}
