use super::desc::SurfaceCaps;
use super::error::SurfaceErrorAction;

/// Picks the surface format.
///
/// The first reported format is the surface's preferred one; with
/// `prefer_srgb` an sRGB 8-bit format wins when available.
pub fn choose_surface_format(caps: &SurfaceCaps, prefer_srgb: bool) -> Option<wgpu::TextureFormat> {
    let first = *caps.formats.first()?;

    if prefer_srgb {
        let srgb = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        if let Some(f) = srgb.into_iter().find(|f| caps.formats.contains(f)) {
            return Some(f);
        }
    }

    Some(first)
}

/// Returns `requested` if supported, otherwise the first supported mode.
pub fn choose_alpha_mode(
    caps: &SurfaceCaps,
    requested: wgpu::CompositeAlphaMode,
) -> wgpu::CompositeAlphaMode {
    if caps.alpha_modes.contains(&requested) {
        return requested;
    }

    let fallback = caps
        .alpha_modes
        .first()
        .copied()
        .unwrap_or(wgpu::CompositeAlphaMode::Auto);
    log::debug!("alpha mode {requested:?} unsupported by surface; using {fallback:?}");
    fallback
}

/// Classifies a surface acquisition error.
///
/// `Reconfigured` means the caller must configure the surface again before
/// the next acquisition.
pub fn surface_error_action(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}
