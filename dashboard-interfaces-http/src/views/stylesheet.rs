pub const STYLESHEET_PATH: &str = "/assets/dashboard.css";

/// Companion stylesheet for the class hooks emitted by the page renderer.
pub const DASHBOARD_CSS: &str = r#":root {
  --bg: #0b1220;
  --surface: #0f172a;
  --card: #ffffff;
  --ink: #0f172a;
  --muted: #64748b;
  --border: #e2e8f0;
  --shadow: rgba(15, 23, 42, 0.14);
  --accent: #2563eb;
  --high: #dc2626;
  --medium: #f59e0b;
}
* { box-sizing: border-box; }
body {
  margin: 0;
  font-family: "IBM Plex Sans", "Source Sans 3", sans-serif;
  background: radial-gradient(circle at top, #1e293b 0%, #0f172a 55%, #0b1220 100%);
  color: #e2e8f0;
}
.app-root { max-width: 1200px; margin: 0 auto; padding: 32px 20px 48px; }
.app-header {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  align-items: flex-end;
  gap: 16px;
  background: linear-gradient(135deg, rgba(37,99,235,0.18), rgba(15,23,42,0.95));
  border-radius: 20px;
  padding: 28px;
  box-shadow: 0 18px 40px rgba(15, 23, 42, 0.35);
}
.app-badge {
  display: inline-block;
  font-size: 11px;
  text-transform: uppercase;
  letter-spacing: 0.12em;
  padding: 4px 10px;
  border-radius: 999px;
  background: rgba(37, 99, 235, 0.25);
  color: #bfdbfe;
}
.app-title { margin: 10px 0 6px; font-size: 28px; letter-spacing: 0.01em; }
.app-subtitle { margin: 0; color: var(--muted); font-size: 14px; }
.app-meta { display: flex; flex-wrap: wrap; gap: 8px; }
.meta-pill {
  font-size: 12px;
  padding: 6px 12px;
  border-radius: 999px;
  border: 1px solid rgba(148, 163, 184, 0.4);
  color: #cbd5e1;
}
.app-main { margin-top: 24px; display: flex; flex-direction: column; gap: 24px; }
.kpi-section {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 12px;
}
.kpi-card {
  background: rgba(255,255,255,0.96);
  color: var(--ink);
  padding: 16px 18px;
  border-radius: 14px;
  box-shadow: 0 8px 20px var(--shadow);
}
.kpi-card p { margin: 0; }
.kpi-label {
  font-size: 11px;
  text-transform: uppercase;
  letter-spacing: 0.12em;
  color: var(--muted);
}
.kpi-value { font-size: 26px; font-weight: 700; margin-top: 6px !important; }
.kpi-value-danger { color: var(--high); }
.kpi-footer { font-size: 12px; color: var(--muted); margin-top: 6px !important; }
.arch-section h2, .table-header h2 { margin: 0 0 8px; font-size: 18px; }
.arch-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 12px;
}
.arch-card {
  background: rgba(15, 23, 42, 0.7);
  border: 1px solid rgba(148, 163, 184, 0.25);
  border-radius: 14px;
  padding: 14px 16px;
}
.arch-card p { margin: 0; }
.arch-name { font-weight: 600; }
.arch-id { font-size: 12px; color: #93c5fd; margin-top: 4px !important; }
.arch-caption { font-size: 13px; color: var(--muted); margin-top: 6px !important; }
.table-header {
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
  gap: 12px;
  margin-bottom: 12px;
}
.table-subtitle { margin: 0; font-size: 13px; color: var(--muted); max-width: 640px; }
.btn-secondary {
  border: 1px solid var(--border);
  background: #f1f5f9;
  color: #1e293b;
  font-size: 13px;
  padding: 8px 14px;
  border-radius: 10px;
  cursor: pointer;
}
.table-wrapper {
  background: var(--card);
  color: var(--ink);
  border-radius: 16px;
  overflow: auto;
  box-shadow: 0 12px 28px var(--shadow);
}
.anomaly-table { width: 100%; border-collapse: collapse; font-size: 14px; }
.anomaly-table thead th {
  text-align: left;
  font-size: 11px;
  letter-spacing: 0.12em;
  text-transform: uppercase;
  color: var(--muted);
  background: #f1f5f9;
  padding: 12px 14px;
}
.anomaly-table tbody td {
  padding: 12px 14px;
  border-bottom: 1px solid var(--border);
  vertical-align: middle;
}
.anomaly-table tbody tr:nth-child(even) { background: #f8fafc; }
.mono {
  font-family: "IBM Plex Mono", "JetBrains Mono", "SFMono-Regular", monospace;
  font-size: 12px;
}
.risk-pill {
  display: inline-flex;
  align-items: center;
  padding: 4px 10px;
  border-radius: 999px;
  font-size: 12px;
  font-weight: 600;
  color: white;
}
.risk-high { background: var(--high); }
.risk-medium { background: var(--medium); }
.app-footer { margin-top: 24px; color: var(--muted); font-size: 12px; }
@media (max-width: 720px) {
  .app-header, .table-header { flex-direction: column; align-items: stretch; }
}
"#;
