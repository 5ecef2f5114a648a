//! Update-skipping contract shared by the chrome components.
//!
//! DESIGN
//! ======
//! Each component that receives host props describes, as a pure function, how
//! an incoming push folds into its local state and whether the result needs a
//! re-render. Components wire this into Leptos effects; [`RenderLoop`] drives
//! the same function outside the reactive graph so the skip rules can be
//! checked directly.

#[cfg(test)]
#[path = "view_model_test.rs"]
mod view_model_test;

/// Result of folding one props push into local state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition<S> {
    pub next: S,
    pub rerender: bool,
}

impl<S> Transition<S> {
    pub fn render(next: S) -> Self {
        Self { next, rerender: true }
    }

    pub fn skip(next: S) -> Self {
        Self { next, rerender: false }
    }
}

/// Pure props-to-state reducer for one component.
pub trait ViewModel {
    type State: Clone;
    type Props;

    fn compute_next_state(prev: &Self::State, incoming: &Self::Props) -> Transition<Self::State>;
}

/// Minimal render host: applies pushes and counts renders.
pub struct RenderLoop<M: ViewModel> {
    state: M::State,
    renders: usize,
}

impl<M: ViewModel> RenderLoop<M> {
    /// Mount with `initial` state; the mount itself is the first render.
    pub fn mount(initial: M::State) -> Self {
        Self { state: initial, renders: 1 }
    }

    /// Push new props. Returns whether a render happened.
    pub fn push(&mut self, props: &M::Props) -> bool {
        let Transition { next, rerender } = M::compute_next_state(&self.state, props);
        self.state = next;
        if rerender {
            self.renders += 1;
        }
        rerender
    }

    pub fn state(&self) -> &M::State {
        &self.state
    }

    pub fn renders(&self) -> usize {
        self.renders
    }
}
