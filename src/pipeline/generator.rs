//! Generation entry point: derive, fill, scale, encode, route

use image::RgbaImage;
use tracing::{debug, instrument};

use crate::derivation::DerivedIdentity;
use crate::io::error::Result;
use crate::io::output::{GenerationResult, route};
use crate::io::request::GenerationRequest;
use crate::pattern::fill::draws_per_fill;
use crate::render::{encode_png, scale_nearest};

/// Build the unscaled `pattern_size` x `pattern_size` pattern for a request
///
/// The generator is created here from the derived seed and dropped on
/// return, so no random state outlives the call.
pub fn generate_base_pattern(request: &GenerationRequest) -> RgbaImage {
    let identity = DerivedIdentity::from_value(request.value());
    render_base(request, &identity)
}

fn render_base(request: &GenerationRequest, identity: &DerivedIdentity) -> RgbaImage {
    let size = request.pattern_size();
    let mut rng = identity.rng();
    let mut base = RgbaImage::new(size, size);
    request
        .algorithm()
        .fill(&mut base, identity.color(), request.dark_mode(), &mut rng);
    debug!(draws = draws_per_fill(size), "filled base pattern");
    base
}

/// Produce one identicon and deliver it according to the request
///
/// Identical requests always yield byte-identical PNG output.
///
/// # Errors
///
/// Returns an error if:
/// - Scaling rejects the requested dimension
/// - PNG encoding fails
/// - The output directory cannot be created or the file cannot be written
#[instrument(skip_all, fields(algorithm = %request.algorithm(), size = request.pattern_size()))]
pub fn generate(request: &GenerationRequest) -> Result<GenerationResult> {
    let identity = DerivedIdentity::from_value(request.value());
    let color = identity.color();
    debug!(
        seed = identity.seed(),
        color = ?color.0,
        dark_mode = request.dark_mode(),
        "derived identity"
    );

    let base = render_base(request, &identity);
    let scaled = scale_nearest(&base, request.dimension())?;
    let bytes = encode_png(&scaled)?;
    debug!(dimension = request.dimension(), len = bytes.len(), "encoded png");

    let file_name = request.file_name().resolve(&identity);
    route(bytes, request.output_mode(), request.output_dir(), &file_name)
}
