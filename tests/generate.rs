//! End-to-end generation tests

use std::fs;
use tempfile::TempDir;

use minipress::content::PostStore;
use minipress::generator::Generator;
use minipress::Site;

fn write_post(site_dir: &std::path::Path, name: &str, title: &str, date: &str, body: &str) {
    let posts = site_dir.join("posts");
    fs::create_dir_all(&posts).unwrap();
    fs::write(
        posts.join(name),
        format!("---\ntitle: {}\ndate: '{}'\n---\n\n{}\n", title, date, body),
    )
    .unwrap();
}

#[test]
fn generates_listing_and_post_pages() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("blog.yml"),
        "title: Field Notes\nauthor: Keny\ndescription: A blog about things I build.\n",
    )
    .unwrap();

    write_post(
        tmp.path(),
        "ssg-ssr.md",
        "When to Use Static Generation v.s. Server-side Rendering",
        "2020-01-02",
        "We recommend using **Static Generation** whenever possible.",
    );
    write_post(
        tmp.path(),
        "pre-rendering.md",
        "Two Forms of Pre-rendering",
        "2020-01-01",
        "Next to nothing beats pre-rendering.",
    );

    let site = Site::new(tmp.path()).unwrap();
    let posts = PostStore::new(&site.posts_dir).list().unwrap();
    Generator::new(&site).unwrap().generate(&posts).unwrap();

    let index = fs::read_to_string(site.output_dir.join("index.html")).unwrap();

    // Listing is date-descending: the Jan 2 post comes first
    let first = index.find("ssg-ssr").unwrap();
    let second = index.find("pre-rendering").unwrap();
    assert!(first < second);

    // Long-form dates from the ISO front-matter strings
    assert!(index.contains("January 2, 2020"));
    assert!(index.contains("January 1, 2020"));

    // Site chrome from blog.yml
    assert!(index.contains("Keny"));
    assert!(index.contains("A blog about things I build."));

    // Per-post page carries the rendered Markdown body
    let page = fs::read_to_string(site.output_dir.join("posts/ssg-ssr/index.html")).unwrap();
    assert!(page.contains("<strong>Static Generation</strong>"));
    assert!(page.contains(r#"<time datetime="2020-01-02">January 2, 2020</time>"#));
    assert!(page.contains("When to Use Static Generation v.s. Server-side Rendering"));
}

#[test]
fn regeneration_reads_fresh_from_disk() {
    let tmp = TempDir::new().unwrap();
    write_post(tmp.path(), "draft.md", "Draft", "2021-05-01", "Version one.");

    let site = Site::new(tmp.path()).unwrap();
    site.generate().unwrap();

    let page_path = site.output_dir.join("posts/draft/index.html");
    assert!(fs::read_to_string(&page_path).unwrap().contains("Version one."));

    write_post(tmp.path(), "draft.md", "Draft", "2021-05-01", "Version two.");
    site.generate().unwrap();

    let page = fs::read_to_string(&page_path).unwrap();
    assert!(page.contains("Version two."));
    assert!(!page.contains("Version one."));
}

#[test]
fn generate_fails_without_posts_directory() {
    let tmp = TempDir::new().unwrap();
    let site = Site::new(tmp.path()).unwrap();
    assert!(site.generate().is_err());
}

#[test]
fn clean_removes_output_directory() {
    let tmp = TempDir::new().unwrap();
    write_post(tmp.path(), "one.md", "One", "2020-01-01", "Body.");

    let site = Site::new(tmp.path()).unwrap();
    site.generate().unwrap();
    assert!(site.output_dir.exists());

    site.clean().unwrap();
    assert!(!site.output_dir.exists());
}
