//! Blog representation types.
//!
//! Each type lists its members with `resource!` so scanning declarations can discover
//! them. `Tag` has no `id` member; it marks `slug` as its identifier instead.

use resource_mapping::resource;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct Author {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, Default)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub published: bool,
    /// Editor-only text, never exposed.
    pub draft_notes: String,
    pub author: Option<Arc<Author>>,
    pub author_id: Option<u64>,
    pub comments: Vec<Comment>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default)]
pub struct Comment {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct Tag {
    pub slug: String,
    pub label: String,
}

resource!(Author {
    id,
    name,
    email,
    posts => many Post,
});

resource!(Post {
    id,
    title,
    body,
    published,
    #[skip] draft_notes,
    author => one Author,
    author_id,
    comments => many Comment,
    tags => many Tag,
});

resource!(Comment { id, text });

resource!(Tag { #[id] slug, label });

impl Author {
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            posts: Vec::new(),
        }
    }
}

impl Post {
    /// A published post written by `author`.
    pub fn new(id: u64, title: impl Into<String>, author: &Arc<Author>) -> Self {
        Self {
            id,
            title: title.into(),
            published: true,
            author_id: Some(author.id),
            author: Some(Arc::clone(author)),
            ..Self::default()
        }
    }

    pub fn with_comment(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.comments.push(Comment {
            id: id.into(),
            text: text.into(),
        });
        self
    }

    pub fn with_tag(mut self, slug: impl Into<String>, label: impl Into<String>) -> Self {
        self.tags.push(Tag {
            slug: slug.into(),
            label: label.into(),
        });
        self
    }
}

/// A handful of posts by two authors.
pub fn sample_posts() -> Vec<Post> {
    let ada = Arc::new(Author::new(1, "Ada", "ada@example.com"));
    let grace = Arc::new(Author::new(2, "Grace", "grace@example.com"));

    vec![
        Post::new(10, "Notes on the Analytical Engine", &ada)
            .with_comment("c-100", "Remarkable")
            .with_tag("history", "History"),
        Post::new(11, "Compilers for Everyone", &grace)
            .with_comment("c-110", "Agreed")
            .with_comment("c-111", "Which language?")
            .with_tag("compilers", "Compilers")
            .with_tag("history", "History"),
        Post::new(12, "Debugging a Moth", &grace),
    ]
}
