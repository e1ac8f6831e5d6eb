//! Stylesheet for the landing page.
//!
//! Injected once through `leptos_meta::Style`. Covers layout, the hero
//! particle field, entrance transitions (`.reveal*`), skeleton shimmer,
//! cards and accents, code blocks and the footer.

/// Complete CSS for the page. Dark theme only.
pub const LANDING_CSS: &str = r#"
:root{--bg:#0b0f19;--bg-card:rgba(255,255,255,.04);--border:rgba(255,255,255,.08);--text:#e5e7eb;--muted:#9ca3af;--blue:#3b82f6;--purple:#a855f7;--green:#22c55e;--yellow:#eab308;--indigo:#6366f1;}
*{box-sizing:border-box;}
html{scroll-behavior:smooth;}
body{margin:0;background:var(--bg);color:var(--text);font-family:system-ui,-apple-system,Segoe UI,Helvetica,Arial,sans-serif;line-height:1.6;}
a{color:inherit;text-decoration:none;}
.container{max-width:1120px;margin:0 auto;padding:0 24px;}
.container.narrow{max-width:880px;}
.sr-only{position:absolute;width:1px;height:1px;padding:0;margin:-1px;overflow:hidden;clip:rect(0,0,0,0);border:0;}
.icon{width:24px;height:24px;}
.icon-xs{width:14px;height:14px;}
.icon-sm{width:18px;height:18px;}
.icon-md{width:22px;height:22px;}
.icon-fill{width:100%;height:100%;}
.gradient-text{background:linear-gradient(90deg,var(--blue),var(--purple));-webkit-background-clip:text;background-clip:text;color:transparent;}

.hero{position:relative;min-height:100vh;display:flex;align-items:center;overflow:hidden;text-align:center;}
.hero-particles{position:absolute;inset:0;pointer-events:none;}
.particle{position:absolute;width:4px;height:4px;border-radius:50%;background:rgba(147,197,253,.35);left:var(--from-x);top:var(--from-y);animation:drift linear infinite alternate;}
.hero-content{position:relative;z-index:1;}
.hero-mark{width:72px;height:72px;margin:0 auto 24px;color:var(--blue);}
.hero-title{font-size:clamp(2.5rem,7vw,4.5rem);margin:0 0 16px;}
.hero-description{color:var(--muted);font-size:1.25rem;max-width:640px;margin:0 auto 32px;}
.hero-actions{display:flex;gap:16px;justify-content:center;flex-wrap:wrap;}
.btn{display:inline-flex;align-items:center;gap:8px;padding:12px 24px;border-radius:12px;font-weight:600;transition:transform .2s,box-shadow .2s;}
.btn:hover{transform:translateY(-2px);}
.btn-primary{background:var(--blue);color:#fff;box-shadow:0 8px 24px rgba(59,130,246,.35);}
.btn-secondary{border:1px solid var(--border);background:var(--bg-card);}

.features,.installation,.usage{padding:96px 0;}
.section-header{text-align:center;margin-bottom:48px;}
.section-title{font-size:2.25rem;margin:0 0 12px;}
.section-description{color:var(--muted);max-width:640px;margin:0 auto;}
.features-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(240px,1fr));gap:24px;}
.feature-card,.guide-card,.install-step{background:var(--bg-card);border:1px solid var(--border);border-radius:16px;padding:24px;}
.hover-glow{transition:box-shadow .3s,transform .3s;}
.hover-glow:hover{transform:translateY(-4px);box-shadow:0 12px 32px rgba(99,102,241,.18);}
.accent-icon{width:48px;height:48px;padding:10px;border-radius:12px;margin-bottom:16px;}
.accent-blue{color:var(--blue);background:rgba(59,130,246,.12);}
.accent-purple{color:var(--purple);background:rgba(168,85,247,.12);}
.accent-green{color:var(--green);background:rgba(34,197,94,.12);}
.accent-yellow{color:var(--yellow);background:rgba(234,179,8,.12);}
.accent-indigo{color:var(--indigo);background:rgba(99,102,241,.12);}
.tint-blue{border-color:rgba(59,130,246,.25);}
.tint-purple{border-color:rgba(168,85,247,.25);}
.tint-green{border-color:rgba(34,197,94,.25);}
.tint-yellow{border-color:rgba(234,179,8,.25);}
.tint-indigo{border-color:rgba(99,102,241,.25);}
.float{animation:float 3s ease-in-out infinite;}

.platform-selector{display:flex;justify-content:center;gap:12px;margin-bottom:32px;}
.platform-btn{display:inline-flex;align-items:center;gap:8px;padding:10px 20px;border-radius:10px;border:1px solid var(--border);background:var(--bg-card);color:var(--text);cursor:pointer;font-weight:600;}
.platform-btn.active{background:var(--blue);border-color:var(--blue);color:#fff;}
.install-steps{list-style:none;margin:0;padding:0;display:flex;flex-direction:column;gap:16px;}
.step-title,.guide-title{margin:0 0 12px;font-size:1.125rem;}
.step-note{color:var(--muted);font-size:.875rem;margin:12px 0 0;}
.code-block{position:relative;background:rgba(0,0,0,.35);border:1px solid var(--border);border-radius:10px;}
.code-block pre{margin:0;padding:14px 48px 14px 16px;overflow-x:auto;font-family:ui-monospace,SFMono-Regular,Menlo,Consolas,monospace;font-size:.875rem;}
.code-block-dark{background:#05070d;}
.copy-btn{position:absolute;top:8px;right:8px;padding:6px;border:none;border-radius:8px;background:transparent;color:var(--muted);cursor:pointer;}
.copy-btn:hover{color:var(--text);background:rgba(255,255,255,.08);}
.glass{backdrop-filter:blur(6px);background:rgba(255,255,255,.05);}

.guide-list{display:flex;flex-direction:column;gap:24px;}
.guide-card{display:flex;gap:20px;}
.guide-card .accent-icon{flex:none;}
.guide-body{flex:1;min-width:0;}
.guide-description{color:var(--muted);margin:0 0 16px;}
.guide-details{list-style:none;margin:0;padding:0;display:flex;flex-direction:column;gap:8px;}
.guide-detail{display:flex;align-items:center;gap:10px;}
.guide-detail .check{width:22px;height:22px;padding:4px;margin:0;border-radius:50%;}
.guide-note{display:flex;gap:8px;align-items:center;margin-top:12px;color:var(--muted);font-size:.875rem;}

.footer{border-top:1px solid var(--border);padding:64px 0 32px;}
.footer-grid{display:grid;grid-template-columns:2fr 1fr 1fr;gap:32px;}
.footer-title{font-size:1.5rem;margin:0 0 12px;}
.footer-description{color:var(--muted);}
.footer-social{display:flex;gap:12px;}
.social-link{color:var(--muted);transition:color .2s;}
.social-link:hover{color:var(--text);}
.footer-group-title{margin:0 0 12px;}
.footer-links{list-style:none;margin:0;padding:0;display:flex;flex-direction:column;gap:8px;}
.footer-link{display:inline-flex;align-items:center;gap:6px;color:var(--muted);}
.footer-link:hover{color:var(--text);}
.footer-bottom{margin-top:48px;padding-top:24px;border-top:1px solid var(--border);text-align:center;color:var(--muted);font-size:.875rem;}

.reveal{opacity:1;transform:none;transition-property:opacity,transform;transition-timing-function:ease-out;}
.reveal-up{opacity:0;transform:translateY(20px);}
.reveal-left{opacity:0;transform:translateX(-20px);}
.reveal-fade{opacity:0;}
.reveal.is-visible{opacity:1;transform:none;}
.enter-up{animation:enter-up .6s ease-out both;}
.pop-in{animation:pop-in .5s ease-out both;}
.fade-in{animation:fade-in .6s ease-out both;}
.delay-200{animation-delay:.2s;}
.delay-400{animation-delay:.4s;}
.nudge-down{animation:nudge-down 1.5s ease-in-out infinite;}
.shimmer{background-image:linear-gradient(90deg,var(--text) 40%,#fff 50%,var(--text) 60%);background-size:200% 100%;-webkit-background-clip:text;background-clip:text;color:transparent;animation:shimmer 4s linear infinite;}

.page-skeleton,.skeleton-slot{padding:48px 0;}
.skeleton{background:linear-gradient(90deg,rgba(255,255,255,.04) 25%,rgba(255,255,255,.09) 50%,rgba(255,255,255,.04) 75%);background-size:200% 100%;border-radius:12px;animation:skeleton 1.4s ease-in-out infinite;}
.skeleton-banner{min-height:80vh;display:flex;flex-direction:column;align-items:center;justify-content:center;gap:16px;}
.skeleton-logo{width:72px;height:72px;}
.skeleton-title{width:min(420px,80%);height:56px;}
.skeleton-line{width:min(560px,90%);height:18px;}
.skeleton-line.short{width:min(360px,70%);}
.skeleton-heading{width:280px;height:36px;margin:0 auto 12px;}
.skeleton-subheading{width:min(480px,90%);height:18px;margin:0 auto 40px;}
.skeleton-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(240px,1fr));gap:24px;}
.skeleton-stack{display:flex;flex-direction:column;gap:16px;}
.skeleton-card{height:160px;}
.skeleton-columns{display:grid;grid-template-columns:2fr 1fr 1fr;gap:32px;}
.skeleton-column{height:140px;}

@keyframes drift{to{left:var(--to-x);top:var(--to-y);}}
@keyframes float{0%,100%{transform:translateY(0);}50%{transform:translateY(-6px);}}
@keyframes enter-up{from{opacity:0;transform:translateY(20px);}to{opacity:1;transform:none;}}
@keyframes pop-in{from{opacity:0;transform:scale(.6);}to{opacity:1;transform:scale(1);}}
@keyframes fade-in{from{opacity:0;}to{opacity:1;}}
@keyframes nudge-down{0%,100%{transform:translateY(0);}50%{transform:translateY(4px);}}
@keyframes shimmer{to{background-position:-200% 0;}}
@keyframes skeleton{from{background-position:200% 0;}to{background-position:-200% 0;}}

@media (max-width:768px){
.footer-grid,.skeleton-columns{grid-template-columns:1fr;}
.guide-card{flex-direction:column;}
}
@media (prefers-reduced-motion:reduce){
.reveal,.reveal-up,.reveal-left,.reveal-fade{opacity:1;transform:none;transition:none;}
.particle,.float,.shimmer,.skeleton,.nudge-down{animation:none;}
}
"#;
