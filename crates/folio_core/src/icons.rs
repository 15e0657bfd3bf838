//! Technology name to brand icon lookup for the about page tech stack.
//!
//! Unknown names resolve to [`TechIcon::Generic`].

/// Icon set available to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechIcon {
    React,
    TypeScript,
    NodeJs,
    Python,
    FramerMotion,
    ThreeJs,
    Figma,
    AdobePhotoshop,
    AdobeIllustrator,
    AdobeAfterEffects,
    Blender,
    VsCode,
    Git,
    Docker,
    Html5,
    Css3,
    JavaScript,
    /// Fallback box icon.
    Generic,
}

impl TechIcon {
    /// Resolves a display name exactly as written in the tech stack list.
    pub fn for_name(name: &str) -> Self {
        match name.trim() {
            "React/Next.js" | "React" => Self::React,
            "TypeScript" => Self::TypeScript,
            "Node.js" => Self::NodeJs,
            "Python" => Self::Python,
            "Framer Motion" => Self::FramerMotion,
            "Three.js" => Self::ThreeJs,
            "Figma" => Self::Figma,
            "Adobe Photoshop" => Self::AdobePhotoshop,
            "Adobe Illustrator" => Self::AdobeIllustrator,
            "Adobe After Effects" => Self::AdobeAfterEffects,
            "Blender" => Self::Blender,
            "VS Code" => Self::VsCode,
            "Git" => Self::Git,
            "Docker" => Self::Docker,
            "HTML5" => Self::Html5,
            "CSS3" => Self::Css3,
            "JavaScript" => Self::JavaScript,
            // No brand icon exists for FL Studio.
            "FL Studio" => Self::Generic,
            _ => Self::Generic,
        }
    }

    /// Icon asset id understood by the presentation layer.
    pub fn slug(self) -> &'static str {
        match self {
            Self::React => "si-react",
            Self::TypeScript => "si-typescript",
            Self::NodeJs => "si-nodedotjs",
            Self::Python => "si-python",
            Self::FramerMotion => "si-framer",
            Self::ThreeJs => "si-threedotjs",
            Self::Figma => "si-figma",
            Self::AdobePhotoshop => "si-adobephotoshop",
            Self::AdobeIllustrator => "si-adobeillustrator",
            Self::AdobeAfterEffects => "si-adobeaftereffects",
            Self::Blender => "si-blender",
            Self::VsCode => "vsc-code",
            Self::Git => "si-git",
            Self::Docker => "si-docker",
            Self::Html5 => "si-html5",
            Self::Css3 => "si-css3",
            Self::JavaScript => "si-javascript",
            Self::Generic => "box",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TechIcon;

    #[test]
    fn known_names_resolve_to_brand_icons() {
        assert_eq!(TechIcon::for_name("React/Next.js"), TechIcon::React);
        assert_eq!(TechIcon::for_name("VS Code").slug(), "vsc-code");
    }

    #[test]
    fn unknown_names_fall_back_to_generic() {
        assert_eq!(TechIcon::for_name("FL Studio"), TechIcon::Generic);
        assert_eq!(TechIcon::for_name("react"), TechIcon::Generic);
        assert_eq!(TechIcon::for_name("").slug(), "box");
    }
}
