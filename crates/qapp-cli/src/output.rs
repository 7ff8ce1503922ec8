use qapp_core::Event;

/// Human-readable progress line for `event`. Leading and trailing newlines
/// are part of the layout.
pub fn render(event: &Event) -> String {
    match event {
        Event::FetchingTemplates => "\n🔍 Fetching available templates...\n".to_string(),
        Event::Creating { name, template } => {
            format!("\n🚀 Creating project \"{name}\" using template \"{template}\"...\n")
        }
        Event::Cloned => "✅ Template cloned successfully!".to_string(),
        Event::ManifestUpdated { file } => format!("📦 Updated {file} with project name."),
        Event::Installing => "\n📦 Installing dependencies...".to_string(),
        Event::Ready {
            name,
            package_manager,
        } => format!(
            "\n🎉 Project \"{name}\" is ready!\n\nNext steps:\n  cd {name}\n  {package_manager} run dev"
        ),
        Event::OpeningEditor { editor } => format!("\n💻 Opening project in {editor}..."),
        Event::EditorUnavailable { editor } => {
            format!("\n⚠️ {editor} not found or not installed. Open the project manually.")
        }
    }
}
