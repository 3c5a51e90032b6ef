use crate::{
    emblem::layout::{ElementKind, ElementLayout},
    registry::store::HandleRegistry,
};

/// The rendering collaborator that owns the actual drawables.
///
/// Mounting is a two-phase protocol: during [`Renderer::mount`] the implementation creates each
/// primitive of `layout` and attaches its handle into `sink` under [`Primitive::path`]; returning
/// means the subtree has committed and every handle is live. The entrance effect runs strictly
/// after that return.
///
/// [`Primitive::path`]: crate::Primitive::path
pub trait Renderer<H> {
    /// Create the primitives of `layout`, attaching each handle into `sink`.
    fn mount(&mut self, layout: &ElementLayout, sink: &mut HandleRegistry<H>);

    /// Remove the primitives of `kind`. Their handles must not be used afterwards.
    fn unmount(&mut self, kind: ElementKind);
}

impl<H, R> Renderer<H> for &mut R
where
    R: Renderer<H> + ?Sized,
{
    fn mount(&mut self, layout: &ElementLayout, sink: &mut HandleRegistry<H>) {
        (**self).mount(layout, sink);
    }

    fn unmount(&mut self, kind: ElementKind) {
        (**self).unmount(kind);
    }
}
