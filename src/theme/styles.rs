//! Global CSS styles for the card editor.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SHELL (Backgrounds) */
  --shell-black: #1d1d1b;
  --panel-gray: #2a2a28;
  --field-gray: #374151;
  --field-border: #4b5563;

  /* BRAND */
  --indigo: #3645a9;
  --indigo-dark: #2d378a;
  --magenta: #993399;
  --magenta-dark: #862d86;

  /* TEXT */
  --text-primary: #e5e7eb;
  --text-secondary: #9ca3af;
  --text-muted: #6b7280;

  /* SEMANTIC */
  --danger: #f87171;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: 'Noto Sans', 'Segoe UI', sans-serif;
  background: var(--shell-black);
  color: var(--text-primary);
  min-height: 100vh;
}

/* === Layout === */
.editor-shell {
  display: flex;
  align-items: flex-start;
  gap: 2rem;
  padding: 2rem;
  min-height: 100vh;
}

.preview-pane {
  flex: 1;
  display: flex;
  align-items: center;
  justify-content: center;
  position: sticky;
  top: 2rem;
  padding: 2rem 0;
}

/* === Control Panel === */
.control-panel {
  width: 400px;
  flex-shrink: 0;
  background: var(--panel-gray);
  border-radius: 1rem;
  padding: 1.5rem;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.4);
  max-height: calc(100vh - 4rem);
  overflow-y: auto;
}

.panel-title {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: 1.25rem;
}

.panel-section {
  font-size: 1.05rem;
  font-weight: 600;
  color: var(--text-primary);
  border-bottom: 1px solid var(--field-gray);
  padding: 1rem 0 0.5rem;
  margin-bottom: 0.75rem;
}

/* === Form Fields === */
.form-field {
  margin-bottom: 0.9rem;
}

.field-label {
  display: block;
  font-size: 0.85rem;
  color: var(--text-secondary);
  margin-bottom: 0.3rem;
}

.input-field {
  width: 100%;
  padding: 0.55rem 0.75rem;
  background: var(--field-gray);
  border: 1px solid var(--field-border);
  border-radius: 0.4rem;
  color: var(--text-primary);
  font-size: 0.95rem;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field::placeholder {
  color: var(--text-muted);
}

.input-field:focus {
  outline: none;
  border-color: var(--magenta);
  box-shadow: 0 0 0 2px rgba(153, 51, 153, 0.35);
}

.select-field {
  cursor: pointer;
}

.color-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.color-field {
  width: 100%;
  height: 2.5rem;
  padding: 0.2rem;
  background: var(--field-gray);
  border: 1px solid var(--field-border);
  border-radius: 0.4rem;
  cursor: pointer;
}

/* === Buttons === */
.btn-primary, .btn-accent, .btn-ghost {
  width: 100%;
  padding: 0.6rem 1rem;
  border: none;
  border-radius: 0.4rem;
  font-size: 0.95rem;
  font-weight: 600;
  color: #ffffff;
  cursor: pointer;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn-primary { background: var(--indigo); }
.btn-primary:hover { background: var(--indigo-dark); transform: scale(1.02); }

.btn-accent { background: var(--magenta); }
.btn-accent:hover { background: var(--magenta-dark); transform: scale(1.02); }

.btn-ghost {
  background: transparent;
  border: 1px solid var(--field-border);
  color: var(--text-secondary);
}
.btn-ghost:hover { border-color: var(--text-secondary); color: var(--text-primary); }

.btn-primary:disabled, .btn-accent:disabled, .btn-ghost:disabled {
  opacity: 0.5;
  cursor: default;
  transform: none;
}

.panel-actions {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

/* === Logo Picker === */
.logo-picker-error {
  margin-top: 0.4rem;
  font-size: 0.8rem;
  color: var(--danger);
}

/* === Card Preview === */
.card-preview {
  width: 100%;
  max-width: 530px;
  border-radius: 0.75rem;
  overflow: hidden;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.card-preview:hover {
  transform: scale(1.03);
}

.card-preview svg {
  display: block;
  width: 100%;
  height: auto;
}
"#;
