//! Embedded HTML/CSS/JS frontend for the aiportfolio dashboard.
//!
//! The entire SPA is compiled into the binary as a string constant.
//! No external assets, no build tools, no CDN dependencies. Charts are
//! drawn as inline SVG from the `series` arrays the API returns.

/// The complete single-page dashboard HTML.
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>AI Portfolio</title>
<style>
:root {
  --bg: #0d1117;
  --surface: #161b22;
  --border: #30363d;
  --text: #e6edf3;
  --text-muted: #8b949e;
  --accent: #58a6ff;
  --green: #3fb950;
  --yellow: #d29922;
  --red: #f85149;
  --purple: #bc8cff;
  --cyan: #39d2c0;
  --radius: 8px;
  --font: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
  --mono: 'SF Mono', 'Cascadia Code', 'Fira Code', monospace;
}

* { margin: 0; padding: 0; box-sizing: border-box; }
body {
  background: var(--bg);
  color: var(--text);
  font-family: var(--font);
  font-size: 14px;
  line-height: 1.5;
}

a { color: var(--accent); text-decoration: none; }
a:hover { text-decoration: underline; }

/* Layout */
.app {
  max-width: 1200px;
  margin: 0 auto;
  padding: 24px;
}

header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 24px;
  padding-bottom: 16px;
  border-bottom: 1px solid var(--border);
}

header h1 {
  font-size: 24px;
  font-weight: 600;
  display: flex;
  align-items: center;
  gap: 10px;
}

header h1 .logo {
  color: var(--accent);
  font-family: var(--mono);
  font-weight: 700;
}

header .subtitle {
  color: var(--text-muted);
  font-size: 13px;
}

.badge {
  display: inline-flex;
  align-items: center;
  gap: 4px;
  padding: 4px 10px;
  border-radius: 12px;
  font-size: 12px;
  font-weight: 500;
  background: var(--surface);
  border: 1px solid var(--border);
}

.badge.ok { border-color: var(--green); color: var(--green); }
.badge.err { border-color: var(--red); color: var(--red); }

/* Breadcrumbs */
.crumbs {
  font-size: 13px;
  color: var(--text-muted);
  margin-bottom: 8px;
}

.crumbs a { margin-right: 4px; }

.page-title {
  display: flex;
  align-items: center;
  gap: 10px;
  font-size: 20px;
  font-weight: 600;
  margin-bottom: 16px;
}

.page-title .swatch {
  width: 12px;
  height: 12px;
  border-radius: 3px;
}

/* Navigation */
nav {
  display: flex;
  gap: 4px;
  margin-bottom: 24px;
  background: var(--surface);
  border-radius: var(--radius);
  padding: 4px;
  border: 1px solid var(--border);
}

nav button {
  flex: 1;
  padding: 8px 16px;
  border: none;
  border-radius: 6px;
  background: transparent;
  color: var(--text-muted);
  font-size: 13px;
  font-weight: 500;
  cursor: pointer;
  transition: all 0.15s;
}

nav button:hover { color: var(--text); background: rgba(255,255,255,0.04); }
nav button.active { background: var(--accent); color: #fff; }

/* Cards */
.card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 20px;
  margin-bottom: 16px;
}

.card h2 {
  font-size: 16px;
  font-weight: 600;
  margin-bottom: 16px;
  color: var(--text);
}

.widgets {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(480px, 1fr));
  gap: 16px;
}

.widgets .wide { grid-column: 1 / -1; }

/* Stats grid */
.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: 16px;
  margin-bottom: 8px;
}

.stat-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 20px;
  text-align: center;
}

.stat-card .value {
  font-size: 28px;
  font-weight: 700;
  font-family: var(--mono);
  color: var(--accent);
  line-height: 1.1;
}

.stat-card .label {
  font-size: 12px;
  color: var(--text-muted);
  margin-top: 6px;
  text-transform: uppercase;
  letter-spacing: 0.5px;
}

.stat-card .hint {
  font-size: 11px;
  color: var(--text-muted);
  margin-top: 4px;
  font-style: italic;
}

/* Charts */
svg.chart { width: 100%; height: 260px; }
svg.chart text { fill: var(--text-muted); font-size: 11px; font-family: var(--font); }
svg.chart .grid { stroke: var(--border); stroke-width: 1; }
svg.chart .axis { stroke: var(--text-muted); stroke-width: 1; }

.legend {
  display: flex;
  flex-wrap: wrap;
  gap: 12px;
  margin-top: 8px;
  font-size: 12px;
  color: var(--text-muted);
}

.legend .dot {
  display: inline-block;
  width: 10px;
  height: 10px;
  border-radius: 50%;
  margin-right: 4px;
}

/* Tables */
table {
  width: 100%;
  border-collapse: collapse;
}

th, td {
  text-align: left;
  padding: 8px 12px;
  border-bottom: 1px solid var(--border);
  font-size: 13px;
}

th {
  color: var(--text-muted);
  font-weight: 500;
  font-size: 12px;
  text-transform: uppercase;
  letter-spacing: 0.5px;
}

tr.link { cursor: pointer; }
tr.link:hover td { background: rgba(255,255,255,0.03); }

.empty-state {
  text-align: center;
  padding: 40px;
  color: var(--text-muted);
}

/* Explorer filters */
.filters {
  display: grid;
  grid-template-columns: 2fr repeat(6, 1fr);
  gap: 8px;
  margin-bottom: 16px;
}

.filters input, .filters select {
  width: 100%;
  padding: 8px 12px;
  border: 1px solid var(--border);
  border-radius: 6px;
  background: var(--bg);
  color: var(--text);
  font-size: 13px;
}

.filters input:focus, .filters select:focus {
  outline: none;
  border-color: var(--accent);
}

.status-pill {
  display: inline-block;
  padding: 2px 8px;
  border-radius: 10px;
  font-size: 11px;
  font-weight: 600;
}

.status-pill.active { background: rgba(63,185,80,0.15); color: var(--green); }
.status-pill.training { background: rgba(210,153,34,0.15); color: var(--yellow); }
.status-pill.pending { background: rgba(139,148,158,0.15); color: var(--text-muted); }

.mono { font-family: var(--mono); font-size: 12px; }
.num { text-align: right; font-family: var(--mono); }

/* Toast */
.toast {
  position: fixed;
  bottom: 24px;
  right: 24px;
  padding: 12px 20px;
  border-radius: var(--radius);
  background: var(--surface);
  border: 1px solid var(--red);
  color: var(--red);
  font-size: 13px;
  opacity: 0;
  transform: translateY(10px);
  transition: all 0.3s;
  pointer-events: none;
}

.toast.show { opacity: 1; transform: translateY(0); }
</style>
</head>
<body>
<div class="app">
  <header>
    <div>
      <h1><span class="logo">&#9670;</span> AI Portfolio</h1>
      <div class="subtitle">AI governance dashboard for banking use cases</div>
    </div>
    <div><span class="badge" id="health-badge">...</span></div>
  </header>

  <nav id="nav">
    <button data-route="#/">Portfolio</button>
    <button data-route="#/explore">Explorer</button>
  </nav>

  <div id="page"></div>
</div>

<div class="toast" id="toast"></div>

<script>
// ---------------------------------------------------------------------------
// API helpers
// ---------------------------------------------------------------------------
async function api(path) {
  const res = await fetch(path);
  const body = await res.json();
  return { status: res.status, body };
}

function toast(msg) {
  const el = document.getElementById('toast');
  el.textContent = msg;
  el.className = 'toast show';
  setTimeout(() => el.className = 'toast', 3000);
}

function esc(s) {
  return String(s ?? '').replace(/[&<>"']/g, c => ({
    '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
  }[c]));
}

function fmtMoney(v) {
  return v ? '$' + v.toFixed(1) + 'M' : '-';
}

function fmtPct(v) {
  return v ? v.toFixed(1) + '%' : 'N/A';
}

const PALETTE = ['#58a6ff', '#3fb950', '#bc8cff', '#d29922', '#39d2c0', '#f85149', '#8b949e'];
function colorAt(p, i) { return p.color || PALETTE[i % PALETTE.length]; }

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------
// #/                        portfolio
// #/department/{id}         department
// #/use-case/{id}           use-case detail
// #/explore                 filterable listing
// Optional "?tab=" suffix selects a tab.
function parseRoute() {
  const hash = location.hash || '#/';
  const [path, query] = hash.slice(1).split('?');
  const params = new URLSearchParams(query || '');
  const parts = path.split('/').filter(Boolean);
  return { parts, tab: params.get('tab') };
}

function go(route) { location.hash = route; }

document.getElementById('nav').addEventListener('click', e => {
  if (e.target.tagName !== 'BUTTON') return;
  go(e.target.dataset.route);
});

window.addEventListener('hashchange', render);

async function render() {
  const { parts, tab } = parseRoute();
  const q = tab ? '?tab=' + encodeURIComponent(tab) : '';

  document.querySelectorAll('nav button').forEach(b => {
    const explore = b.dataset.route === '#/explore';
    b.classList.toggle('active', explore === (parts[0] === 'explore'));
  });

  try {
    if (parts.length === 0) {
      return showView(await api('/api/portfolio' + q), '#/');
    }
    if (parts[0] === 'department' && parts[1]) {
      return showView(await api('/api/departments/' + encodeURIComponent(parts[1]) + q),
        '#/department/' + parts[1]);
    }
    if (parts[0] === 'use-case' && parts[1]) {
      return showView(await api('/api/use-cases/' + encodeURIComponent(parts[1]) + q),
        '#/use-case/' + parts[1]);
    }
    if (parts[0] === 'explore') {
      return showExplorer();
    }
    showNotFound({ error: 'page not found' });
  } catch (e) {
    toast('Request failed: ' + e.message);
  }
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------
function showNotFound(body) {
  document.getElementById('page').innerHTML = `
    <div class="card empty-state">
      <h2>Not found</h2>
      <p>${esc(body.error)}</p>
      <p style="margin-top:12px"><a href="#/">Back to portfolio</a></p>
    </div>`;
}

function showView(res, base) {
  if (res.status === 404) return showNotFound(res.body);
  if (res.status !== 200) return toast(res.body.error || 'request failed');
  const v = res.body;

  const crumbs = ['<a href="#/">Portfolio</a>'];
  if (v.parent) crumbs.push(`<a href="#/department/${esc(v.parent.id)}">${esc(v.parent.name)}</a>`);

  const swatch = v.entity ? `<span class="swatch" style="background:${esc(v.entity.color)}"></span>` : '';
  const tabs = v.tabs.map(t =>
    `<button class="${t.id === v.tab ? 'active' : ''}" data-route="${base}?tab=${t.id}">${esc(t.title)}</button>`
  ).join('');

  document.getElementById('page').innerHTML = `
    ${v.page !== 'portfolio' ? `<div class="crumbs">${crumbs.join(' / ')}</div>` : ''}
    <div class="page-title">${swatch}${esc(v.title)}</div>
    <nav id="tabs">${tabs}</nav>
    <div class="widgets">${v.widgets.map(renderWidget).join('')}</div>`;

  document.getElementById('tabs').addEventListener('click', e => {
    if (e.target.tagName === 'BUTTON') go(e.target.dataset.route);
  });
  bindRowLinks();
}

function renderWidget(w) {
  switch (w.widget) {
    case 'stats': return `<div class="wide stats-grid">${w.cards.map(renderCard).join('')}</div>`;
    case 'chart': return `<div class="card"><h2>${esc(w.title)}</h2>${renderChart(w)}</div>`;
    case 'table': return `<div class="card wide"><h2>${esc(w.title)}</h2>${renderTable(w)}</div>`;
  }
  return '';
}

function renderCard(c) {
  return `<div class="stat-card">
    <div class="value">${esc(c.value)}</div>
    <div class="label">${esc(c.label)}</div>
    ${c.hint ? `<div class="hint">${esc(c.hint)}</div>` : ''}
  </div>`;
}

function renderTable(t) {
  if (t.empty_message) return `<div class="empty-state">${esc(t.empty_message)}</div>`;
  const head = t.columns.map(c => `<th>${esc(c)}</th>`).join('');
  const body = t.rows.map((r, i) => {
    const link = t.links && t.links[i];
    return `<tr${link ? ` class="link" data-href="${esc(link)}"` : ''}>${r.map(c => `<td>${esc(c)}</td>`).join('')}</tr>`;
  }).join('');
  return `<table><thead><tr>${head}</tr></thead><tbody>${body}</tbody></table>`;
}

function bindRowLinks() {
  document.querySelectorAll('tr.link').forEach(tr =>
    tr.addEventListener('click', () => go(tr.dataset.href)));
}

// ---------------------------------------------------------------------------
// SVG charts
// ---------------------------------------------------------------------------
const W = 480, H = 260, PAD = 40;

function renderChart(c) {
  if (!c.series.length) return '<div class="empty-state">No data</div>';
  switch (c.kind) {
    case 'bar': return barChart(c.series);
    case 'line': return lineChart(c.series);
    case 'pie': return pieChart(c.series);
    case 'radar': return radarChart(c.series);
    case 'scatter': return scatterChart(c.series);
  }
  return '';
}

function svg(inner) {
  return `<svg class="chart" viewBox="0 0 ${W} ${H}" preserveAspectRatio="xMidYMid meet">${inner}</svg>`;
}

function gridLines(max) {
  let out = '';
  for (let i = 0; i <= 4; i++) {
    const y = H - PAD - (H - 2 * PAD) * i / 4;
    out += `<line class="grid" x1="${PAD}" y1="${y}" x2="${W - 10}" y2="${y}"/>`;
    out += `<text x="${PAD - 6}" y="${y + 4}" text-anchor="end">${(max * i / 4).toFixed(0)}</text>`;
  }
  return out;
}

function barChart(series) {
  const max = Math.max(...series.map(p => p.y), 1);
  const slot = (W - PAD - 10) / series.length;
  const bars = series.map((p, i) => {
    const h = (H - 2 * PAD) * p.y / max;
    const x = PAD + i * slot + slot * 0.15;
    const label = String(p.x).length > 12 ? String(p.x).slice(0, 11) + '.' : p.x;
    return `<rect x="${x}" y="${H - PAD - h}" width="${slot * 0.7}" height="${h}" rx="3" fill="${colorAt(p, i)}">
        <title>${esc(p.x)}: ${p.y}</title></rect>
      <text x="${x + slot * 0.35}" y="${H - PAD + 14}" text-anchor="middle">${esc(label)}</text>`;
  }).join('');
  return svg(gridLines(max) + bars);
}

function lineChart(series) {
  const max = Math.max(...series.map(p => p.y), 1);
  const step = (W - PAD - 10) / Math.max(series.length - 1, 1);
  const pts = series.map((p, i) => [PAD + i * step, H - PAD - (H - 2 * PAD) * p.y / max]);
  const path = pts.map((xy, i) => (i ? 'L' : 'M') + xy[0] + ',' + xy[1]).join(' ');
  const labels = series.map((p, i) =>
    `<text x="${pts[i][0]}" y="${H - PAD + 14}" text-anchor="middle">${esc(p.x)}</text>`).join('');
  const dots = pts.map((xy, i) =>
    `<circle cx="${xy[0]}" cy="${xy[1]}" r="3" fill="var(--accent)"><title>${esc(series[i].x)}: ${series[i].y}</title></circle>`).join('');
  return svg(gridLines(max) + `<path d="${path}" fill="none" stroke="var(--accent)" stroke-width="2"/>` + dots + labels);
}

function pieChart(series) {
  const total = series.reduce((s, p) => s + p.y, 0);
  if (!total) return '<div class="empty-state">No data</div>';
  const cx = W / 2, cy = H / 2, r = H / 2 - 20;
  let angle = -Math.PI / 2;
  const slices = series.map((p, i) => {
    const sweep = 2 * Math.PI * p.y / total;
    const x1 = cx + r * Math.cos(angle), y1 = cy + r * Math.sin(angle);
    angle += sweep;
    const x2 = cx + r * Math.cos(angle), y2 = cy + r * Math.sin(angle);
    const large = sweep > Math.PI ? 1 : 0;
    if (sweep >= 2 * Math.PI - 1e-9) {
      return `<circle cx="${cx}" cy="${cy}" r="${r}" fill="${colorAt(p, i)}"/>`;
    }
    return `<path d="M${cx},${cy} L${x1},${y1} A${r},${r} 0 ${large} 1 ${x2},${y2} Z" fill="${colorAt(p, i)}">
      <title>${esc(p.x)}: ${p.y}</title></path>`;
  }).join('');
  const legend = series.map((p, i) =>
    `<span><span class="dot" style="background:${colorAt(p, i)}"></span>${esc(p.x)} (${p.y})</span>`).join('');
  return svg(slices) + `<div class="legend">${legend}</div>`;
}

function radarChart(series) {
  const cx = W / 2, cy = H / 2, r = H / 2 - 30;
  const n = series.length;
  const at = (i, v) => {
    const a = -Math.PI / 2 + 2 * Math.PI * i / n;
    return [cx + r * v / 100 * Math.cos(a), cy + r * v / 100 * Math.sin(a)];
  };
  let rings = '';
  for (const level of [25, 50, 75, 100]) {
    rings += `<polygon class="grid" fill="none" points="${series.map((_, i) => at(i, level).join(',')).join(' ')}"/>`;
  }
  const spokes = series.map((p, i) => {
    const [x, y] = at(i, 100);
    const [lx, ly] = at(i, 115);
    return `<line class="grid" x1="${cx}" y1="${cy}" x2="${x}" y2="${y}"/>
      <text x="${lx}" y="${ly}" text-anchor="middle">${esc(p.x)}</text>`;
  }).join('');
  const shape = series.map((p, i) => at(i, Math.min(p.y, 100)).join(',')).join(' ');
  return svg(rings + spokes +
    `<polygon points="${shape}" fill="rgba(88,166,255,0.25)" stroke="var(--accent)" stroke-width="2"/>`);
}

function scatterChart(series) {
  const maxX = Math.max(...series.map(p => p.x), 1);
  const maxY = Math.max(...series.map(p => p.y), 1);
  const dots = series.map((p, i) => {
    const x = PAD + (W - PAD - 10) * p.x / maxX;
    const y = H - PAD - (H - 2 * PAD) * p.y / maxY;
    return `<circle cx="${x}" cy="${y}" r="5" fill="${colorAt(p, i)}" opacity="0.85">
      <title>${esc(p.label || '')} (${p.x}%, $${p.y}M)</title></circle>`;
  }).join('');
  const axis = `<line class="axis" x1="${PAD}" y1="${H - PAD}" x2="${W - 10}" y2="${H - PAD}"/>
    <text x="${W - 10}" y="${H - PAD + 14}" text-anchor="end">accuracy %</text>`;
  return svg(gridLines(maxY) + axis + dots);
}

// ---------------------------------------------------------------------------
// Explorer
// ---------------------------------------------------------------------------
let categories = null;
let departments = null;
const filters = { search: '', status: 'all', ai_type: 'all', data_layer: 'all', department: 'all', sort: 'name', order: 'asc' };

function option(value, label, selected) {
  return `<option value="${esc(value)}"${value === selected ? ' selected' : ''}>${esc(label)}</option>`;
}

async function showExplorer() {
  if (!categories) categories = (await api('/api/categories')).body;
  if (!departments) departments = (await api('/api/departments')).body.departments;

  const f = filters;
  document.getElementById('page').innerHTML = `
    <div class="page-title">Use case explorer</div>
    <div class="filters" id="filters">
      <input id="f-search" placeholder="Search by name..." value="${esc(f.search)}">
      <select id="f-status">
        ${option('all', 'All statuses', f.status)}
        ${['active', 'training', 'pending'].map(s => option(s, s, f.status)).join('')}
      </select>
      <select id="f-ai_type">
        ${option('all', 'All AI types', f.ai_type)}
        ${categories.ai_types.map(c => option(c.id, c.name, f.ai_type)).join('')}
      </select>
      <select id="f-data_layer">
        ${option('all', 'All data layers', f.data_layer)}
        ${categories.data_layers.map(c => option(c.id, c.name, f.data_layer)).join('')}
      </select>
      <select id="f-department">
        ${option('all', 'All departments', f.department)}
        ${departments.map(d => option(d.id, d.name, f.department)).join('')}
      </select>
      <select id="f-sort">
        ${[['name', 'Name'], ['accuracy', 'Accuracy'], ['cost_savings', 'Savings'], ['revenue', 'Revenue']]
          .map(([v, l]) => option(v, 'Sort: ' + l, f.sort)).join('')}
      </select>
      <select id="f-order">
        ${option('asc', 'Ascending', f.order)}
        ${option('desc', 'Descending', f.order)}
      </select>
    </div>
    <div id="listing"></div>`;

  document.getElementById('filters').addEventListener('input', e => {
    const key = e.target.id.slice(2);
    filters[key] = e.target.value;
    loadListing();
  });
  loadListing();
}

async function loadListing() {
  const params = new URLSearchParams(filters);
  const res = await api('/api/use-cases?' + params.toString());
  const el = document.getElementById('listing');
  if (!el) return;
  if (res.status !== 200) {
    el.innerHTML = `<div class="card empty-state">${esc(res.body.error)}</div>`;
    return;
  }
  const l = res.body;
  const s = l.summary;
  const cards = [
    { label: 'Matching', value: `${s.total} of ${l.catalog_total}` },
    { label: 'Cost savings', value: fmtMoney(s.total_cost_savings) },
    { label: 'Revenue', value: fmtMoney(s.total_revenue) },
    { label: 'Avg accuracy', value: fmtPct(s.avg_accuracy) },
  ];
  let table;
  if (l.empty_message) {
    table = `<div class="empty-state">${esc(l.empty_message)}</div>`;
  } else {
    table = `<table><thead><tr>
        <th>Use case</th><th>Department</th><th>Status</th><th>AI type</th><th>Layer</th>
        <th class="num">Accuracy</th><th class="num">Savings</th><th class="num">Revenue</th>
      </tr></thead><tbody>${l.rows.map(r => `
        <tr class="link" data-href="#/use-case/${esc(r.id)}">
          <td>${esc(r.name)}</td>
          <td>${esc(r.department)}</td>
          <td><span class="status-pill ${esc(r.status)}">${esc(r.status)}</span></td>
          <td><span class="dot" style="display:inline-block;width:8px;height:8px;border-radius:50%;background:${esc(r.ai_type_color)}"></span> ${esc(r.ai_type)}</td>
          <td>${esc(r.data_layer)}</td>
          <td class="num">${fmtPct(r.accuracy)}</td>
          <td class="num">${fmtMoney(r.cost_savings)}</td>
          <td class="num">${fmtMoney(r.revenue)}</td>
        </tr>`).join('')}</tbody></table>`;
  }
  el.innerHTML = `<div class="stats-grid">${cards.map(renderCard).join('')}</div>
    <div class="card">${table}</div>`;
  bindRowLinks();
}

// ---------------------------------------------------------------------------
// Init
// ---------------------------------------------------------------------------
(async function init() {
  try {
    const h = (await api('/api/health')).body;
    const badge = document.getElementById('health-badge');
    badge.textContent = `${h.use_cases} use cases / ${h.departments} departments`;
    badge.className = 'badge ok';
  } catch (e) {
    const badge = document.getElementById('health-badge');
    badge.textContent = 'offline';
    badge.className = 'badge err';
  }
  render();
})();
</script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_html_is_complete_document() {
        assert!(INDEX_HTML.starts_with("<!DOCTYPE html>"));
        assert!(INDEX_HTML.trim_end().ends_with("</html>"));
    }

    #[test]
    fn index_html_calls_every_view_endpoint() {
        for endpoint in [
            "/api/portfolio",
            "/api/departments",
            "/api/use-cases",
            "/api/categories",
            "/api/health",
        ] {
            assert!(INDEX_HTML.contains(endpoint), "missing {endpoint}");
        }
    }
}
