use ndarray::ArrayD;

/// A per-sample operation applied to a sample's data array before
/// batching. The output may differ from the input in shape and element
/// type, but must have the same shape and element type for every sample
/// of one generator construction; the first sample's output fixes the
/// layout of the whole run and later samples are trusted to conform.
pub trait Transform<A>: Send + Sync {
    type Output;

    fn apply(&self, data: &ArrayD<A>) -> ArrayD<Self::Output>;
}

impl<A, B, F> Transform<A> for F
where
    F: Fn(&ArrayD<A>) -> ArrayD<B> + Send + Sync,
{
    type Output = B;

    fn apply(&self, data: &ArrayD<A>) -> ArrayD<B> {
        self(data)
    }
}
