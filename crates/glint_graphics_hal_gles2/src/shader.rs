use glint_graphics_hal::{
    Result, Uniform, UniformError, UniformKind, UniformOptions, UniformRegistry,
};
use smart_default::SmartDefault;

#[derive(SmartDefault, Debug, Clone)]
pub struct DiscoverySettings {
    /// If true, uniforms that cannot be uploaded (samplers, unsigned integers,
    /// non-square matrices, arrays) are left out of the registry with a warning.
    /// Otherwise discovery fails on the first one.
    #[default(true)]
    pub skip_unsupported: bool,
}

/// Builds uniforms from what the linker reported for a program.
///
/// Entries without a location are built-ins such as `gl_DepthRange` and are
/// always skipped.
pub fn build_registry<L>(
    active: impl IntoIterator<Item = (glow::ActiveUniform, Option<L>)>,
    settings: &DiscoverySettings,
) -> Result<UniformRegistry<L>> {
    let mut registry = UniformRegistry::new();

    for (uniform, location) in active {
        let Some(location) = location else {
            log::debug!("uniform {} has no location, skipping", uniform.name);
            continue;
        };

        // Arrays are reported as `name[0]`, even when declared with a single element
        let name = match uniform.name.strip_suffix("[0]") {
            Some(name) => name.to_owned(),
            None => uniform.name.clone(),
        };

        let result = if uniform.size == 1 {
            UniformKind::from_gl(uniform.utype).and_then(|kind| {
                Uniform::new(UniformOptions::new(
                    name.clone(),
                    uniform.utype,
                    kind.size(),
                    location,
                ))
            })
        } else {
            Err(UniformError::UnsupportedArray(name.clone(), uniform.size))
        };

        match result {
            Ok(uniform) => {
                log::debug!("uniform {name}: {:?}", uniform.kind());
                registry.insert(uniform);
            }
            Err(e) if settings.skip_unsupported => {
                log::warn!("skipping uniform {name}: {e}");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(registry)
}
