//! Post store - reads posts from the posts directory

use anyhow::{bail, Context, Result};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownRenderer, Post};

/// Reads and renders posts from a directory
pub struct PostStore {
    posts_dir: PathBuf,
    renderer: MarkdownRenderer,
}

impl PostStore {
    /// Create a store over the given posts directory
    pub fn new<P: AsRef<Path>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load all posts, sorted by date descending.
    ///
    /// Posts without a date sort last; equal dates fall back to id order so
    /// repeated runs produce identical output.
    pub fn list(&self) -> Result<Vec<Post>> {
        if !self.posts_dir.exists() {
            bail!("posts directory not found: {:?}", self.posts_dir);
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&self.posts_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                match self.load_file(path) {
                    Ok(post) => posts.push(post),
                    Err(e) => {
                        tracing::warn!("Failed to load post {:?}: {}", path, e);
                    }
                }
            }
        }

        posts.sort_by(|a, b| match (a.date, b.date) {
            (Some(da), Some(db)) => db.cmp(&da).then_with(|| a.id.cmp(&b.id)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.id.cmp(&b.id),
        });

        Ok(posts)
    }

    /// Load a single post by its id (filename without extension)
    pub fn load(&self, id: &str) -> Result<Post> {
        for ext in ["md", "markdown"] {
            let path = self.posts_dir.join(format!("{}.{}", id, ext));
            if path.exists() {
                return self.load_file(&path);
            }
        }
        bail!("no post with id '{}' in {:?}", id, self.posts_dir)
    }

    /// All post ids, one per source file
    pub fn ids(&self) -> Result<Vec<String>> {
        if !self.posts_dir.exists() {
            bail!("posts directory not found: {:?}", self.posts_dir);
        }

        let mut ids = Vec::new();
        for entry in WalkDir::new(&self.posts_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                if let Some(id) = file_id(path) {
                    ids.push(id);
                }
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// Load and render one post file
    fn load_file(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {:?}", path))?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let id = file_id(path)
            .with_context(|| format!("post filename is not valid UTF-8: {:?}", path))?;

        // Title falls back to the filename stem
        let title = fm.title.clone().unwrap_or_else(|| id.clone());

        let content_html = self.renderer.render(body)?;

        let mut post = Post::new(id, title, path.to_path_buf());
        post.date = fm.parse_date();
        post.raw = body.to_string();
        post.content = content_html;

        Ok(post)
    }
}

/// Filename without its extension
fn file_id(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
