//! Text transform pipeline.
//!
//! Conversion is a fixed sequence of pure text-to-text passes. The pipeline
//! owns boxed passes and runs them front to back; passes that change nothing
//! can return the input borrowed.

use std::borrow::Cow;

/// Trait for a single text-to-text rewriting pass.
pub trait TextTransform {
    /// Transform the input text, returning an owned or borrowed string.
    fn transform<'a>(&self, input: &'a str) -> Cow<'a, str>;
}

impl<F> TextTransform for F
where
    F: for<'a> Fn(&'a str) -> Cow<'a, str>,
{
    fn transform<'a>(&self, input: &'a str) -> Cow<'a, str> {
        (self)(input)
    }
}

/// Ordered sequence of text transforms.
#[derive(Default)]
pub struct TransformPipeline {
    transforms: Vec<Box<dyn TextTransform>>,
}

impl TransformPipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Appends a transform pass.
    pub fn add_transform<T: TextTransform + 'static>(&mut self, transform: T) {
        self.transforms.push(Box::new(transform));
    }

    /// Runs every pass in order over the input.
    pub fn run(&self, input: &str) -> String {
        let mut current = Cow::Borrowed(input);
        for transform in &self.transforms {
            let next = transform.transform(current.as_ref());
            current = Cow::Owned(next.into_owned());
        }
        current.into_owned()
    }
}
