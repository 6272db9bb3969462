use super::util::json_inline;

/// Client-side behavior for the demo page: drag from the palette, drop into
/// the workspace, keep dropped items in `localStorage`.
///
/// Dropped buttons, inputs and cards get a small client-side copy of their
/// server templates; other kinds get a labelled placeholder.
pub(super) fn build_inline_js(project: &str, primary: &str, server_count: usize) -> String {
    let project_json = json_inline(project);
    let primary_json = json_inline(primary);

    format!(
        r##"<script>
(function() {{
  var PROJECT = {project_json};
  var PRIMARY = {primary_json};
  var SERVER_COUNT = {server_count};
  var STORAGE_KEY = 'stylegen.workspace.' + PROJECT;

  var workspace = document.getElementById('sg-workspace');
  var dropped = document.getElementById('sg-dropped');
  var counter = document.getElementById('sg-count');
  var items = [];

  function newId(type) {{
    var hash = Math.floor(Math.random() * 0xffffffff).toString(16);
    while (hash.length < 8) hash = '0' + hash;
    return PROJECT + '_' + type + '_' + hash;
  }}

  function clientCss(type, id) {{
    var sel = '#' + id;
    switch (type) {{
      case 'button':
        return sel + ' {{ background-color: ' + PRIMARY + '; color: #ffffff; padding: 12px 24px; ' +
          'border: none; border-radius: 8px; font-size: 16px; font-weight: 600; cursor: pointer; ' +
          'transition: all 0.3s ease; box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1); }}\n' +
          sel + ':hover {{ transform: translateY(-2px); filter: brightness(1.1); }}';
      case 'input':
        return sel + ' {{ width: 100%; padding: 12px 16px; border: 2px solid #ddd; ' +
          'border-radius: 8px; font-size: 16px; }}\n' +
          sel + ':focus {{ outline: none; border-color: ' + PRIMARY + '; }}';
      case 'card':
        return sel + ' {{ background: #ffffff; border-radius: 8px; overflow: hidden; ' +
          'box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1); }}\n' +
          sel + ' .card-header {{ padding: 20px; border-bottom: 1px solid #eeeeee; font-weight: 600; }}\n' +
          sel + ' .card-body {{ padding: 20px; }}';
      default:
        return '';
    }}
  }}

  function clientMarkup(type, id) {{
    switch (type) {{
      case 'button':
        return '<button id="' + id + '">Button</button>';
      case 'input':
        return '<input id="' + id + '" type="text" placeholder="Enter text...">';
      case 'card':
        return '<div id="' + id + '"><div class="card-header">Card Title</div>' +
          '<div class="card-body">Card content goes here.</div></div>';
      default:
        return '<div id="' + id + '" style="padding:16px;border:1px dashed #bbb;border-radius:6px;color:#777">' +
          type + ' (preview after regenerating)</div>';
    }}
  }}

  function render(item) {{
    var wrap = document.createElement('div');
    wrap.className = 'sg-preview-item';
    wrap.setAttribute('data-id', item.id);

    var style = document.createElement('style');
    style.textContent = clientCss(item.type, item.id);

    var tag = document.createElement('span');
    tag.className = 'sg-preview-tag';
    tag.textContent = '#' + item.id;

    var remove = document.createElement('button');
    remove.className = 'sg-remove';
    remove.title = 'Remove';
    remove.innerHTML = '&times;';
    remove.addEventListener('click', function() {{ removeItem(item.id); }});

    var body = document.createElement('div');
    body.innerHTML = clientMarkup(item.type, item.id);

    wrap.appendChild(style);
    wrap.appendChild(tag);
    wrap.appendChild(remove);
    wrap.appendChild(body);
    dropped.appendChild(wrap);
  }}

  function updateCount() {{
    var n = SERVER_COUNT + items.length;
    if (counter) counter.textContent = n + ' element' + (n === 1 ? '' : 's');
  }}

  function save() {{
    try {{
      localStorage.setItem(STORAGE_KEY, JSON.stringify(items));
    }} catch (e) {{ console.warn('stylegen: cannot save workspace', e); }}
  }}

  function load() {{
    try {{
      var raw = localStorage.getItem(STORAGE_KEY);
      var parsed = raw ? JSON.parse(raw) : [];
      return Array.isArray(parsed) ? parsed : [];
    }} catch (e) {{
      return [];
    }}
  }}

  function addItem(type) {{
    var item = {{ type: type, id: newId(type) }};
    items.push(item);
    render(item);
    updateCount();
    save();
  }}

  function removeItem(id) {{
    items = items.filter(function(it) {{ return it.id !== id; }});
    var el = dropped.querySelector('[data-id="' + id + '"]');
    if (el) el.parentNode.removeChild(el);
    updateCount();
    save();
  }}

  window.clearWorkspace = function() {{
    items = [];
    dropped.innerHTML = '';
    updateCount();
    save();
  }};

  window.copyCss = function(btn) {{
    var code = document.getElementById('sg-code');
    if (!code || !navigator.clipboard) return;
    navigator.clipboard.writeText(code.textContent).then(function() {{
      btn.classList.add('copied');
      setTimeout(function() {{ btn.classList.remove('copied'); }}, 1200);
    }});
  }};

  document.querySelectorAll('.sg-palette-item').forEach(function(btn) {{
    btn.addEventListener('dragstart', function(e) {{
      e.dataTransfer.setData('text/plain', btn.getAttribute('data-type'));
      e.dataTransfer.effectAllowed = 'copy';
    }});
    btn.addEventListener('dblclick', function() {{ addItem(btn.getAttribute('data-type')); }});
  }});

  workspace.addEventListener('dragover', function(e) {{
    e.preventDefault();
    e.dataTransfer.dropEffect = 'copy';
    workspace.classList.add('drag-over');
  }});
  workspace.addEventListener('dragleave', function() {{
    workspace.classList.remove('drag-over');
  }});
  workspace.addEventListener('drop', function(e) {{
    e.preventDefault();
    workspace.classList.remove('drag-over');
    var type = e.dataTransfer.getData('text/plain');
    if (/^[a-z]+$/.test(type)) addItem(type);
  }});

  load().forEach(function(item) {{
    if (item && /^[a-z]+$/.test(item.type) && /^[A-Za-z0-9_-]+$/.test(item.id)) {{
      items.push(item);
      render(item);
    }}
  }});
  updateCount();
}})();
</script>"##,
    )
}
