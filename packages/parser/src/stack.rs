//! Checked operand/operator stack shared by the conversion algorithms

/// A growable LIFO stack whose `pop` never goes past empty
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Pop the two most recent items as `(a, b)`, where `b` was pushed last.
    ///
    /// Leaves the stack untouched when it holds fewer than two items.
    pub fn pop_pair(&mut self) -> Option<(T, T)> {
        if self.items.len() < 2 {
            return None;
        }
        let b = self.items.pop()?;
        let a = self.items.pop()?;
        Some((a, b))
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the stack, yielding its only item.
    ///
    /// Returns the actual size as the error when the stack does not hold exactly one item.
    pub fn into_single(mut self) -> Result<T, usize> {
        match self.items.len() {
            1 => self.items.pop().ok_or(0),
            n => Err(n),
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
