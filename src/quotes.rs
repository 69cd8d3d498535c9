use rand::seq::SliceRandom;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

const fn quote(text: &'static str, author: &'static str) -> Quote {
    Quote { text, author }
}

pub const QUOTES: [Quote; 25] = [
    quote(
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    quote(
        "It does not matter how slowly you go as long as you do not stop.",
        "Confucius",
    ),
    quote(
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
    quote(
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    quote(
        "In the middle of difficulty lies opportunity.",
        "Albert Einstein",
    ),
    quote(
        "The greatest glory in living lies not in never falling, but in rising every time we fall.",
        "Nelson Mandela",
    ),
    quote(
        "The way to get started is to quit talking and begin doing.",
        "Walt Disney",
    ),
    quote(
        "Your time is limited, don't waste it living someone else's life.",
        "Steve Jobs",
    ),
    quote(
        "If life were predictable it would cease to be life, and be without flavor.",
        "Eleanor Roosevelt",
    ),
    quote(
        "Life is what happens when you're busy making other plans.",
        "John Lennon",
    ),
    quote(
        "The purpose of our lives is to be happy.",
        "Dalai Lama",
    ),
    quote(
        "Tell me and I forget. Teach me and I remember. Involve me and I learn.",
        "Benjamin Franklin",
    ),
    quote(
        "The only impossible journey is the one you never begin.",
        "Tony Robbins",
    ),
    quote(
        "Two things are infinite: the universe and human stupidity; and I'm not sure about the universe.",
        "Albert Einstein",
    ),
    quote(
        "Be the change that you wish to see in the world.",
        "Mahatma Gandhi",
    ),
    quote(
        "Innovation distinguishes between a leader and a follower.",
        "Steve Jobs",
    ),
    quote(
        "If you look at what you have in life, you'll always have more. If you look at what you don't have in life, you'll never have enough.",
        "Oprah Winfrey",
    ),
    quote(
        "You only live once, but if you do it right, once is enough.",
        "Mae West",
    ),
    quote(
        "The greatest wealth is to live content with little.",
        "Plato",
    ),
    quote(
        "The secret of getting ahead is getting started.",
        "Mark Twain",
    ),
    quote(
        "The best way to predict the future is to create it.",
        "Peter Drucker",
    ),
    quote(
        "Don't watch the clock; do what it does. Keep going.",
        "Sam Levenson",
    ),
    quote(
        "The harder I work, the more luck I seem to have.",
        "Thomas Jefferson",
    ),
    quote(
        "Success is walking from failure to failure with no loss of enthusiasm.",
        "Winston Churchill",
    ),
    quote(
        "Opportunities don't happen. You create them.",
        "Chris Grosser",
    ),
];

/// Picks one quote uniformly at random.
pub fn random_quote() -> Quote {
    *QUOTES
        .choose(&mut rand::thread_rng())
        .unwrap_or(&QUOTES[0])
}
