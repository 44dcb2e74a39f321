/// Number of frames a new stack reserves
pub const DEFAULT_SIZE: usize = 8;

/// A single entry on the stack: the item being processed and how far processing has got
#[derive(Clone, Debug)]
struct Frame<T, S> {
    item: T,
    step: S,
}

/// A stack of items paired with a step/state tag, so that recursive routines can be written
/// against an explicit stack instead of the call stack.
///
/// The step of the top frame can be rewritten in place, which lets a state machine advance a
/// frame without popping and re-pushing it.
#[derive(Clone, Debug)]
pub struct ProcessingStack<T, S> {
    frames: Vec<Frame<T, S>>,
}

impl<T, S> Default for ProcessingStack<T, S>
where
    S: Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> ProcessingStack<T, S>
where
    S: Copy,
{
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SIZE)
    }

    /// Create a stack with room for `capacity` frames before the first resize
    pub fn with_capacity(capacity: usize) -> Self {
        ProcessingStack {
            frames: Vec::with_capacity(usize::max(capacity, 1)),
        }
    }

    /// Push a new frame
    /// Backing storage doubles when it is full
    pub fn push(&mut self, item: T, step: S) {
        if self.frames.len() == self.frames.capacity() {
            self.resize(2 * self.frames.capacity());
        }
        self.frames.push(Frame { item, step });
    }

    /// Grow the backing storage to hold `new_capacity` frames
    fn resize(&mut self, new_capacity: usize) {
        let additional = new_capacity.saturating_sub(self.frames.len());
        self.frames.reserve_exact(additional);
    }

    /// Remove the top frame, returning its item and step
    /// Returns None if the stack is empty
    pub fn pop(&mut self) -> Option<(T, S)> {
        self.frames.pop().map(|frame| (frame.item, frame.step))
    }

    /// Remove and drop the top frame
    pub fn discard_top(&mut self) {
        self.frames.pop();
    }

    /// Peek at the top frame
    pub fn top(&self) -> Option<(&T, S)> {
        self.frames.last().map(|frame| (&frame.item, frame.step))
    }

    pub fn top_item(&self) -> Option<&T> {
        self.frames.last().map(|frame| &frame.item)
    }

    pub fn top_step(&self) -> Option<S> {
        self.frames.last().map(|frame| frame.step)
    }

    /// Overwrite the step of the top frame
    /// Returns false, and does nothing, if the stack is empty
    pub fn set_top_step(&mut self, step: S) -> bool {
        match self.frames.last_mut() {
            Some(frame) => {
                frame.step = step;
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of frames currently on the stack
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Number of frames the backing storage can hold without resizing
    pub fn capacity(&self) -> usize {
        self.frames.capacity()
    }

    /// Drop every frame and give the backing storage back, down to `DEFAULT_SIZE`
    pub fn release(&mut self) {
        self.frames.clear();
        self.frames.shrink_to(DEFAULT_SIZE);
    }
}
