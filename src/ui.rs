use crate::render::{SIGNUP_ACTION, render_activities, render_options};
use crate::view::ViewModel;

/// Host page with the list and selector already projected from `view`.
pub fn render_index(view: &ViewModel) -> String {
    let cards: String = render_activities(view)
        .into_iter()
        .map(|card| card.markup)
        .collect();
    INDEX_HTML
        .replace("{{SIGNUP_ACTION}}", SIGNUP_ACTION)
        .replace("{{OPTIONS}}", &render_options(&view.activity_names()))
        .replace("{{ACTIVITIES}}", &cards)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mergington High School Activities</title>
  <style>
    :root {
      --bg: #f5f7fb;
      --ink: #1f2a37;
      --accent: #1a237e;
      --card: #ffffff;
      --muted: #6b7280;
      --ok: #2e7d32;
      --bad: #c62828;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      font-family: Arial, Helvetica, sans-serif;
      background: var(--bg);
      color: var(--ink);
    }

    header {
      background: var(--accent);
      color: white;
      padding: 20px;
      text-align: center;
    }

    main {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 24px;
      max-width: 1100px;
      margin: 24px auto;
      padding: 0 16px;
    }

    section {
      background: var(--card);
      border-radius: 8px;
      padding: 20px;
      box-shadow: 0 2px 8px rgba(0, 0, 0, 0.08);
    }

    .activity-card {
      border: 1px solid #e5e7eb;
      border-radius: 6px;
      padding: 14px;
      margin-bottom: 14px;
    }

    .activity-card h4 {
      margin: 0 0 8px;
      color: var(--accent);
    }

    .participants-section h5 {
      margin: 10px 0 6px;
    }

    .participants-list {
      list-style: none;
      padding: 0;
      margin: 0;
    }

    .participants-list li {
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 4px 0;
    }

    .delete-participant {
      border: none;
      background: transparent;
      color: var(--bad);
      font-size: 1.1rem;
      cursor: pointer;
    }

    .no-participants {
      color: var(--muted);
      font-style: italic;
    }

    .form-group {
      margin-bottom: 14px;
    }

    .form-group label {
      display: block;
      margin-bottom: 4px;
    }

    .form-group input,
    .form-group select {
      width: 100%;
      padding: 8px;
    }

    #message {
      margin-top: 14px;
      padding: 10px;
      border-radius: 4px;
    }

    #message.success {
      background: #e8f5e9;
      color: var(--ok);
    }

    #message.error {
      background: #ffebee;
      color: var(--bad);
    }

    #message.info {
      background: #e3f2fd;
      color: var(--accent);
    }

    .hidden {
      display: none;
    }
  </style>
</head>
<body>
  <header>
    <h1>Mergington High School</h1>
    <h2>Extracurricular Activities</h2>
  </header>

  <main>
    <section id="activities-container">
      <h3>Available Activities</h3>
      <div id="activities-list">{{ACTIVITIES}}</div>
    </section>

    <section id="signup-container">
      <h3>Sign Up for an Activity</h3>
      <form id="signup-form" method="post" action="{{SIGNUP_ACTION}}">
        <div class="form-group">
          <label for="email">Student Email:</label>
          <input type="email" id="email" name="email" required placeholder="your-email@mergington.edu" />
        </div>
        <div class="form-group">
          <label for="activity">Select Activity:</label>
          <select id="activity" name="activity" required>{{OPTIONS}}</select>
        </div>
        <button type="submit">Sign Up</button>
      </form>
      <div id="message" class="hidden"></div>
    </section>
  </main>
</body>
</html>
"#;
