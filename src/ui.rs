pub fn render_index(authorized: bool) -> String {
    INDEX_HTML.replace("{{AUTHORIZED}}", if authorized { "true" } else { "false" })
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Weekly Fitness Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4f8;
      --bg-2: #cfe3f2;
      --ink: #25303a;
      --steps: #3478f6;
      --calories: #e5484d;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4f0f6 60%, #f2f7fa 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5c6873;
      font-size: 1rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, opacity 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.45;
      cursor: not-allowed;
    }

    .btn-primary {
      background: var(--steps);
      color: white;
      box-shadow: 0 10px 24px rgba(52, 120, 246, 0.3);
    }

    .btn-quiet {
      background: rgba(47, 72, 88, 0.1);
      color: var(--accent-2);
    }

    .nav-row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .week-label {
      font-weight: 600;
      font-size: 1.1rem;
      color: var(--accent-2);
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .bar-steps {
      fill: var(--steps);
    }

    .bar-calories {
      fill: var(--calories);
    }

    .chart-label {
      fill: #7a8089;
      font-size: 11px;
    }

    .legend {
      display: flex;
      gap: 20px;
      font-size: 0.9rem;
      color: #5c6873;
    }

    .legend span::before {
      content: "";
      display: inline-block;
      width: 12px;
      height: 12px;
      border-radius: 3px;
      margin-right: 6px;
      vertical-align: -1px;
    }

    .legend .steps::before {
      background: var(--steps);
    }

    .legend .calories::before {
      background: var(--calories);
    }

    .status {
      font-size: 0.95rem;
      color: #5c6873;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .hidden {
      display: none;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Weekly Fitness Tracker</h1>
      <p class="subtitle">Steps and active calories, one week at a time.</p>
    </header>

    <section id="auth-view">
      <button class="btn-primary" id="authorize-btn" type="button">Authorize health data access</button>
    </section>

    <section id="dashboard-view" class="hidden">
      <div class="nav-row">
        <button class="btn-quiet" id="prev-btn" type="button">&#8592; Previous week</button>
        <span class="week-label" id="week-label"></span>
        <button class="btn-quiet" id="next-btn" type="button">Next week &#8594;</button>
      </div>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 600 260" aria-label="Weekly steps and calories" role="img"></svg>
      </div>
      <div class="legend">
        <span class="steps">Steps</span>
        <span class="calories">Active calories</span>
      </div>
      <button class="btn-quiet" id="logout-btn" type="button">Log out</button>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const authorized = {{AUTHORIZED}};
    const authView = document.getElementById('auth-view');
    const dashboardView = document.getElementById('dashboard-view');
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const weekLabelEl = document.getElementById('week-label');
    const nextBtn = document.getElementById('next-btn');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const showDashboard = (show) => {
      authView.classList.toggle('hidden', show);
      dashboardView.classList.toggle('hidden', !show);
    };

    const monthDay = (iso) => {
      const [, month, day] = iso.split('-');
      return `${month}/${day}`;
    };

    // Bar heights arrive pre-normalized against the shared maximum of both
    // series, on a 0..200 scale.
    const renderChart = (bars) => {
      const width = 600;
      const baseline = 226;
      if (!bars.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data for this week</text>';
        return;
      }

      const slot = width / bars.length;
      const barWidth = Math.min(26, slot / 3);
      let svg = '';
      bars.forEach((bar, index) => {
        const center = slot * index + slot / 2;
        const stepsX = center - barWidth - 2;
        const caloriesX = center + 2;
        svg += `<rect class="bar-steps" x="${stepsX}" y="${baseline - bar.steps_height}" width="${barWidth}" height="${bar.steps_height}"><title>${Math.round(bar.steps_value)} steps</title></rect>`;
        svg += `<rect class="bar-calories" x="${caloriesX}" y="${baseline - bar.calories_height}" width="${barWidth}" height="${bar.calories_height}"><title>${Math.round(bar.calories_value)} kcal</title></rect>`;
        svg += `<text class="chart-label" x="${center}" y="${baseline + 18}" text-anchor="middle">${monthDay(bar.date)}</text>`;
      });
      chartEl.innerHTML = svg;
    };

    const applyWeek = (week) => {
      weekLabelEl.textContent = `${week.start_date} – ${week.end_date}`;
      nextBtn.disabled = week.next_disabled;
      renderChart(week.chart);
    };

    let reloadTimer = null;

    const loadWeek = async () => {
      const res = await fetch('/api/week');
      if (!res.ok) {
        throw new Error('Unable to load week data');
      }
      applyWeek(await res.json());
    };

    // The two series fetches finish independently of the navigation
    // response, so poll once more shortly after to pick up stragglers.
    const scheduleReload = () => {
      if (reloadTimer) {
        clearTimeout(reloadTimer);
      }
      reloadTimer = setTimeout(() => {
        loadWeek().catch((err) => setStatus(err.message, 'error'));
      }, 400);
    };

    const navigate = async (direction) => {
      const res = await fetch(`/api/week/${direction}`, { method: 'POST' });
      if (!res.ok) {
        throw new Error('Navigation failed');
      }
      const week = await res.json();
      applyWeek(week);
      if (week.moved) {
        scheduleReload();
      }
    };

    document.getElementById('authorize-btn').addEventListener('click', async () => {
      setStatus('Requesting access...', '');
      try {
        const res = await fetch('/api/authorize', { method: 'POST' });
        const outcome = await res.json();
        if (!outcome.authorized) {
          setStatus('Health data access was denied.', 'error');
          return;
        }
        setStatus('', '');
        showDashboard(true);
        await loadWeek();
        scheduleReload();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('prev-btn').addEventListener('click', () => {
      navigate('previous').catch((err) => setStatus(err.message, 'error'));
    });

    nextBtn.addEventListener('click', () => {
      navigate('next').catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('logout-btn').addEventListener('click', async () => {
      await fetch('/api/logout', { method: 'POST' });
      showDashboard(false);
      setStatus('', '');
    });

    if (authorized) {
      showDashboard(true);
      loadWeek().then(scheduleReload).catch((err) => setStatus(err.message, 'error'));
    }
  </script>
</body>
</html>
"#;
