//! Placeholder posts shown whenever the store has nothing to offer.

use std::sync::{Arc, LazyLock};

use crate::post::Post;

/// Demo posts are `demo1` to `demo6`.
pub const DEMO_ID_PREFIX: &str = "demo";

/// Number of demo posts the home page shows.
pub const HOME_DEMO_COUNT: usize = 3;

struct DemoEntry {
    title: &'static str,
    author: &'static str,
    date: &'static str,
    content: &'static str,
    image: &'static str,
    tags: [&'static str; 3],
}

const ENTRIES: [DemoEntry; 6] = [
    DemoEntry {
        title: "Getting Started with BlogCraft",
        author: "BlogCraft Team",
        date: "2025-09-15",
        content: "<p>Welcome to BlogCraft! This is a demo blog post to show you how easy it is to create and publish content on our platform. With our intuitive editor, you can create beautiful blogs in minutes.</p><p>Whether you're a seasoned blogger or just starting out, BlogCraft provides all the tools you need to share your stories with the world.</p>",
        image: "https://images.unsplash.com/photo-1499750310107-5fef28a66643?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1470&q=80",
        tags: ["Getting Started", "Tutorial", "Platform"],
    },
    DemoEntry {
        title: "10 Tips for Better Blog Writing",
        author: "Writing Expert",
        date: "2025-09-10",
        content: "<p>Creating engaging blog content is both an art and a science. Here are 10 tips to help you write better blogs:</p><ol><li>Know your audience</li><li>Start with a strong headline</li><li>Use storytelling techniques</li><li>Include visuals</li><li>Keep paragraphs short</li><li>Use subheadings</li><li>Include actionable advice</li><li>End with a call-to-action</li><li>Edit ruthlessly</li><li>Be consistent</li></ol>",
        image: "https://images.unsplash.com/photo-1455390582262-044cdead277a?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1470&q=80",
        tags: ["Writing Tips", "Content Creation", "Blogging"],
    },
    DemoEntry {
        title: "The Future of Digital Publishing",
        author: "Tech Analyst",
        date: "2025-09-05",
        content: "<p>The digital publishing landscape is evolving rapidly. New technologies are changing how we create, distribute, and consume content. In this blog, we explore the latest trends in digital publishing and what they mean for content creators.</p><p>From AI-assisted writing tools to immersive reading experiences, the future of digital publishing is bright and full of possibilities.</p>",
        image: "https://images.unsplash.com/photo-1544654803-b69140b285a1?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1470&q=80",
        tags: ["Technology", "Publishing", "Future"],
    },
    DemoEntry {
        title: "Building a Personal Brand Through Blogging",
        author: "Marketing Guru",
        date: "2025-08-28",
        content: "<p>In today's digital world, personal branding is more important than ever. Blogging is one of the most effective ways to establish yourself as an expert in your field and build a loyal following.</p><p>Your blog becomes a portfolio of your knowledge and expertise, showcasing your unique perspective and value to potential employers, clients, or collaborators.</p>",
        image: "https://images.unsplash.com/photo-1552664730-d307ca884978?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1470&q=80",
        tags: ["Personal Branding", "Marketing", "Career"],
    },
    DemoEntry {
        title: "The Art of Storytelling in Content Creation",
        author: "Creative Writer",
        date: "2025-08-20",
        content: "<p>Storytelling is at the heart of compelling content. Whether you're writing a blog post, creating a video, or designing a presentation, incorporating storytelling elements can make your content more engaging and memorable.</p><p>Great stories have the power to connect with people on an emotional level, making your message more impactful and your brand more relatable.</p>",
        image: "https://images.unsplash.com/photo-1497514440783-20f98b682f56?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1470&q=80",
        tags: ["Storytelling", "Content Creation", "Writing"],
    },
    DemoEntry {
        title: "Maximizing Your Blog's SEO Potential",
        author: "SEO Specialist",
        date: "2025-08-15",
        content: "<p>Search engine optimization (SEO) is crucial for ensuring your blog content reaches its intended audience. Without proper SEO, even the best content can get lost in the vast digital landscape.</p><p>In this guide, we'll cover essential SEO strategies that can help improve your blog's visibility and drive more organic traffic to your site.</p>",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1470&q=80",
        tags: ["SEO", "Digital Marketing", "Traffic"],
    },
];

static DEMO_POSTS: LazyLock<Vec<Post>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .enumerate()
        .map(|(index, entry)| Post {
            id: Arc::from(format!("{DEMO_ID_PREFIX}{}", index + 1)),
            title: Some(Arc::from(entry.title)),
            author: Some(Arc::from(entry.author)),
            content: Some(Arc::from(entry.content)),
            date: Some(Arc::from(entry.date)),
            image_url: Some(Arc::from(entry.image)),
            tags: Some(entry.tags.iter().map(|tag| Arc::from(*tag)).collect()),
            is_featured: None,
            user_id: None,
        })
        .collect()
});

/// The full demo set used by the listing page.
pub fn listing_posts() -> &'static [Post] {
    &DEMO_POSTS
}

/// The shorter demo set used by the home page.
pub fn home_posts() -> &'static [Post] {
    &DEMO_POSTS[..HOME_DEMO_COUNT]
}

pub fn find(id: &str) -> Option<&'static Post> {
    DEMO_POSTS.iter().find(|post| post.id.as_ref() == id)
}
