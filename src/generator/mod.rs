//! Generator module - writes the static HTML pages

use anyhow::Result;
use std::fs;
use tera::Context;
use walkdir::WalkDir;

use crate::content::Post;
use crate::helpers::date_iso;
use crate::templates::{PostData, SiteData, TemplateRenderer};
use crate::Site;

/// Stylesheet written alongside the generated pages
const STYLESHEET: &str = include_str!("../templates/builtin/style.css");

/// Static site generator using the embedded templates
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        Ok(Self {
            site: site.clone(),
            renderer,
        })
    }

    /// Generate the entire site from an already-sorted post list
    pub fn generate(&self, posts: &[Post]) -> Result<()> {
        fs::create_dir_all(&self.site.output_dir)?;

        fs::write(self.site.output_dir.join("style.css"), STYLESHEET)?;

        self.copy_static_assets()?;

        let site_data = self.build_site_data();
        let post_data: Vec<PostData> = posts.iter().map(build_post_data).collect();

        self.generate_index_page(&site_data, &post_data)?;
        self.generate_post_pages(&site_data, &post_data)?;

        Ok(())
    }

    /// Build site data for templates
    fn build_site_data(&self) -> SiteData {
        SiteData {
            title: self.site.config.title.clone(),
            author: self.site.config.author.clone(),
            description: self.site.config.description.clone(),
            language: self.site.config.language.clone(),
        }
    }

    /// Generate the listing page
    fn generate_index_page(&self, site_data: &SiteData, posts: &[PostData]) -> Result<()> {
        let mut context = Context::new();
        context.insert("site", site_data);
        context.insert("posts", posts);

        let html = self.renderer.render("index.html", &context)?;
        let output_path = self.site.output_dir.join("index.html");
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(())
    }

    /// Generate one page per post
    fn generate_post_pages(&self, site_data: &SiteData, posts: &[PostData]) -> Result<()> {
        for post in posts {
            let mut context = Context::new();
            context.insert("site", site_data);
            context.insert("post", post);

            let html = self.renderer.render("post.html", &context)?;

            let output_path = self
                .site
                .output_dir
                .join("posts")
                .join(&post.id)
                .join("index.html");

            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output_path, html)?;
            tracing::debug!("Generated: {:?}", output_path);
        }

        Ok(())
    }

    /// Copy the static directory through verbatim
    fn copy_static_assets(&self) -> Result<()> {
        if !self.site.static_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(&self.site.static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let relative = path.strip_prefix(&self.site.static_dir).unwrap_or(path);
            let dest = self.site.output_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
            tracing::debug!("Copied: {:?}", dest);
        }

        Ok(())
    }
}

/// Map a post onto its template context entry
fn build_post_data(post: &Post) -> PostData {
    PostData {
        id: post.id.clone(),
        title: post.title.clone(),
        date: post.date.as_ref().map(date_iso),
        path: format!("/posts/{}/", post.id),
        content: post.content.clone(),
    }
}
