//! Browser-side glue.
//!
//! The server renders every paper block; the page script only fetches the next
//! batch, appends it, queues typesetting for the new abstracts and mirrors the
//! checkbox cascade of `FilterPanel::toggle_selection`.

/// MathJax configuration and loader. Inline math uses `$...$`.
pub const MATHJAX: &str = r#"
    <script>
    window.MathJax = { tex: { inlineMath: [['$', '$'], ['\\(', '\\)']] } };
    </script>
    <script async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-chtml.js"></script>
"#;

/// Infinite scroll and the "load more" fallback button.
pub const LOAD_MORE_SCRIPT: &str = r#"
    <script>
    (function() {
        const table = document.getElementById('rtable');
        const btn = document.getElementById('loadmorebtn');
        if (!table || !btn) return;

        let offset = parseInt(table.dataset.offset, 10) || 0;
        let done = table.dataset.exhausted === 'true';
        let loading = false;

        function finish() {
            done = true;
            btn.classList.add('hidden');
        }

        if (done) { finish(); return; }

        async function loadMore() {
            if (done || loading) return;
            loading = true;
            try {
                const response = await fetch(table.dataset.moreUrl + '&offset=' + offset);
                if (!response.ok) {
                    console.error('Failed to load papers:', response.status);
                    return;
                }
                const data = await response.json();
                const holder = document.createElement('div');
                holder.innerHTML = data.html;
                const added = Array.from(holder.children);
                added.forEach(node => table.appendChild(node));
                offset = data.next_offset;

                // typeset only what was just added
                const targets = added.flatMap(node => Array.from(node.querySelectorAll('[data-typeset]')));
                if (targets.length && window.MathJax && MathJax.typesetPromise) {
                    MathJax.typesetPromise(targets).catch(err => console.error('Typeset failed:', err));
                }

                if (data.exhausted) finish();
            } catch (err) {
                console.error('Failed to load papers:', err);
            } finally {
                loading = false;
            }
        }

        window.addEventListener('scroll', function() {
            const scrollTop = window.scrollY;
            const bodyHeight = document.documentElement.scrollHeight - window.innerHeight;
            if (bodyHeight > 0 && scrollTop / bodyHeight > 0.9) {
                loadMore();
            }
        });

        btn.addEventListener('click', loadMore);
    })();
    </script>
"#;

/// Checkbox cascade for the filter panel.
pub const FILTER_SCRIPT: &str = r#"
    <script>
    (function() {
        const panel = document.querySelector('.filter-panel');
        if (!panel) return;
        const boxes = Array.from(panel.querySelectorAll('input[type=checkbox]'));
        const leaves = boxes.filter(b => b.dataset.kind === 'leaf');

        function updateCheckBoxes(box) {
            const kind = box.dataset.kind;
            if (kind === 'all') {
                boxes.forEach(b => { b.checked = b.dataset.kind !== 'none'; });
            } else if (kind === 'none') {
                boxes.forEach(b => { b.checked = b.dataset.kind === 'none'; });
            } else if (kind === 'venue') {
                leaves.filter(b => b.dataset.venue === box.dataset.venue)
                      .forEach(b => { b.checked = box.checked; });
            } else if (kind === 'year') {
                leaves.filter(b => b.dataset.year === box.dataset.year)
                      .forEach(b => { b.checked = box.checked; });
            }
        }

        boxes.forEach(b => b.addEventListener('change', () => updateCheckBoxes(b)));
    })();
    </script>
"#;
