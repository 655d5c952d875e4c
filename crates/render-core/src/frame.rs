use crate::traits::Surface;
use std::ops::{Deref, DerefMut};

/// A saved coordinate frame, restored when the guard drops.
///
/// Every transform the compositor applies happens through a guard, so the
/// frame is restored on every exit path, early returns included.
pub struct FrameGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> FrameGuard<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for FrameGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for FrameGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for FrameGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
