
/// Ordered, fixed set of slides. Slides are opaque to the engine and are
/// identified only by their position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSet<T> {
    slides: Vec<T>,
}

impl<T> SlideSet<T> {
    pub fn new(slides: Vec<T>) -> Self {
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&T> {
        self.slides.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slides.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slides
    }
}

impl<T> From<Vec<T>> for SlideSet<T> {
    fn from(slides: Vec<T>) -> Self {
        Self::new(slides)
    }
}

impl<T> FromIterator<T> for SlideSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a SlideSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}
