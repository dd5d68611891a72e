//! Type declarations for generated components
//!
//! The same `.d.ts` text is written next to the component in both formats.

use crate::adapters::component::DEPRECATED_MARKER;

/// Build the `.d.ts` for a component
pub fn declaration(identifier: &str, deprecated: bool) -> String {
    let mut lines = vec!["import * as React from 'react';".to_string()];
    if deprecated {
        lines.push(DEPRECATED_MARKER.to_string());
    }
    lines.push(format!(
        "declare const {identifier}: React.ForwardRefExoticComponent<React.PropsWithoutRef<React.SVGProps<SVGSVGElement>> & {{ title?: string, titleId?: string }} & React.RefAttributes<SVGSVGElement>>;"
    ));
    lines.push(format!("export default {identifier};"));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
